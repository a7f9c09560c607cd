use super::BoardCell;
use crate::connect_four::prelude::*;

impl Board {
    /// Determines whether or not the coord lies on this board.
    pub fn in_bounds(&self, coord: &Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    /// Gets the board cell at a given coordinate.
    pub fn get(&self, coord: &Coord) -> Result<BoardCell> {
        if self.in_bounds(coord) {
            Ok(self.get_unchecked(coord))
        } else {
            Err(anyhow!(
                "invalid coordinate {coord} on a {}x{} board",
                self.height,
                self.width
            ))
        }
    }

    /// Ensures a column index is on the board.
    pub(crate) fn check_column(&self, column: usize) -> Result<()> {
        if column < self.width {
            Ok(())
        } else {
            Err(MoveError::InvalidColumn { column, width: self.width }.into())
        }
    }
}

impl Board {
    /// Row-major offset of a coordinate.
    fn offset(&self, coord: &Coord) -> usize {
        coord.row * self.width + coord.col
    }

    /// Accessor into the grid without a bounds report; engine use only.
    pub(crate) fn get_unchecked(&self, coord: &Coord) -> BoardCell {
        self.cells[self.offset(coord)]
    }

    /// Sets a cell in the grid without a bounds report; engine use only.
    pub(super) fn set_unchecked(&mut self, coord: &Coord, piece: Option<Piece>) -> &mut Self {
        let offset = self.offset(coord);
        self.cells[offset] = self.cells[offset].with_piece(piece);
        self
    }
}
