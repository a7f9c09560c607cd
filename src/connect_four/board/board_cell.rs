use crate::connect_four::prelude::*;

/// A cell on a Connect Four board: empty, or holding one piece.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BoardCell(Option<Piece>);

impl BoardCell {
    pub const EMPTY: BoardCell = BoardCell(None);

    /// Determines the piece in this cell, if any.
    pub fn piece(&self) -> Option<Piece> {
        self.0
    }

    /// Determines whether or not this cell is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Produces a new board cell holding the given piece.
    pub fn with_piece(&self, piece: Option<Piece>) -> BoardCell {
        BoardCell(piece)
    }

    /// Notates the cell as a single character.
    pub fn notate(&self) -> char {
        self.0.map_or('.', |piece| piece.notate())
    }
}

impl std::fmt::Display for BoardCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(piece) => write!(f, "{}", piece.glyph()),
            None        => write!(f, "  ")
        }
    }
}
