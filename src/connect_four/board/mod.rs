pub(crate) mod board_cell;
pub(crate) mod indexing;
pub(crate) mod lines;
pub(crate) mod pretty;
pub(crate) mod tentative;

use super::prelude::*;

pub use board_cell::BoardCell;
pub use tentative::TentativeDrop;

/// A rectangular Connect Four grid.
///
/// Row 0 is the top row and pieces fall towards row `height - 1`. Within any column the occupied
/// cells always form one contiguous run resting on the bottom row, because the only mutations are
/// dropping into the lowest empty cell and clearing the highest occupied one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,

    /// The cells of the grid, row-major, top row first.
    cells: Vec<BoardCell>,

    /// The number of pieces stacked in each column.
    heights: Vec<usize>,
}

impl Board {
    /// Returns a new empty board. Boards smaller than four in either dimension are legal,
    /// they just cannot be won.
    pub fn new(height: usize, width: usize) -> Result<Board> {
        let cells = match height.checked_mul(width) {
            Some(count) if count > 0 => count,
            _ => return Err(MoveError::InvalidDimensions { height, width }.into()),
        };
        Ok(Board {
            height,
            width,
            cells: vec![BoardCell::EMPTY; cells],
            heights: vec![0; width],
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Determines the piece at a given row and column on the board, if any.
    pub fn cell(&self, coord: &Coord) -> Result<Option<Piece>> {
        self.get(coord).map(|v: BoardCell| v.piece())
    }

    /// The number of pieces in a column.
    pub fn column_height(&self, column: usize) -> Result<usize> {
        self.check_column(column)?;
        Ok(self.heights[column])
    }

    /// Determines if a piece can still be dropped into the column. Off-board columns have no space.
    pub fn has_space(&self, column: usize) -> bool {
        self.heights.get(column).is_some_and(|&h| h < self.height)
    }

    /// Drops a piece into the lowest empty cell of a column, returning the row it landed on.
    pub fn drop_piece(&mut self, column: usize, piece: Piece) -> Result<usize> {
        self.check_column(column)?;
        if !self.has_space(column) {
            return Err(MoveError::ColumnFull { column }.into());
        }
        let row = self.height - 1 - self.heights[column];
        self.set_unchecked(&Coord::new(row, column), Some(piece));
        self.heights[column] += 1;
        Ok(row)
    }

    /// Clears the highest occupied cell in a column, reversing the last drop made there.
    pub fn undo_drop(&mut self, column: usize) -> Result<()> {
        self.check_column(column)?;
        if self.heights[column] == 0 {
            return Err(MoveError::EmptyColumn { column }.into());
        }
        self.undo_unchecked(column);
        Ok(())
    }

    /// Clears the top of a column known to be non-empty; engine use only.
    pub(crate) fn undo_unchecked(&mut self, column: usize) {
        debug_assert!(self.heights[column] > 0, "undo on empty column {column}");
        let row = self.height - self.heights[column];
        self.set_unchecked(&Coord::new(row, column), None);
        self.heights[column] -= 1;
    }

    /// The legal moves: every column whose top cell is empty, in ascending order.
    pub fn empty_columns(&self) -> Vec<usize> {
        (0..self.width).filter(|&column| self.has_space(column)).collect()
    }

    /// Determines if no column can take another piece.
    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| h == self.height)
    }

    /// Determines if the game on this board is over, either by a line or by a full grid.
    pub fn is_terminal(&self) -> bool {
        self.is_full() || self.check_winner().is_some()
    }

    /// The total number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.heights.iter().sum()
    }

    /// Returns an empty board of the same dimensions.
    pub fn cleared(&self) -> Board {
        Board {
            height: self.height,
            width: self.width,
            cells: vec![BoardCell::EMPTY; self.height * self.width],
            heights: vec![0; self.width],
        }
    }
}
