use std::ops::Neg;
use crate::utils::prelude::*;

pub const DEFAULT_HEIGHT: usize = 6;
pub const DEFAULT_WIDTH: usize = 7;
pub const WIN_LENGTH: usize = 4;
pub const DEFAULT_MAX_DEPTH: usize = 3;

// Search scores, always from the computer's perspective.
pub const WIN_SCORE: i32 = 1000;
pub const DEPTH_PENALTY: i32 = 5;
pub const THREE_SCORE: i32 = 250;
pub const TWO_SCORE: i32 = 100;
pub const BLOCK_PENALTY: i32 = 300;

// A piece colour.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Piece {
    Red = 0,
    Yellow = 1,
}

impl Piece {
    /// Notates the piece as a single character.
    pub fn notate(&self) -> char {
        match self {
            Piece::Red    => 'R',
            Piece::Yellow => 'Y'
        }
    }

    /// The two-column glyph used when drawing the board.
    pub fn glyph(&self) -> &'static str {
        match self {
            Piece::Red    => "\u{1f534}",
            Piece::Yellow => "\u{1f7e1}"
        }
    }

    /// Parses a cell symbol; `.` is an empty cell.
    pub fn parse(ch: char) -> Result<Option<Piece>> {
        match ch {
            'r' | 'R' => Ok(Some(Piece::Red)),
            'y' | 'Y' => Ok(Some(Piece::Yellow)),
            '.'       => Ok(None),
            _         => Err(anyhow!("invalid notation {ch} for piece"))
        }
    }

    /// Gets both pieces in scan order.
    pub fn all() -> [Piece; 2] {
        [Piece::Red, Piece::Yellow]
    }
}

impl Neg for Piece {
    type Output = Piece;
    fn neg(self) -> Self::Output {
        match self {
            Piece::Red    => Piece::Yellow,
            Piece::Yellow => Piece::Red
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Piece::Red    => write!(f, "Red"),
            Piece::Yellow => write!(f, "Yellow")
        }
    }
}
