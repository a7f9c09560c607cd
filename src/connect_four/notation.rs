use regex::Regex;

use crate::connect_four::prelude::*;

impl Board {
    /// Returns the position string for this board: rows top-to-bottom separated by `/`,
    /// each cell one of `R`, `Y` or `.`.
    pub fn notate(&self) -> String {
        (0..self.height())
            .map(|row| {
                (0..self.width())
                    .map(|col| self.get_unchecked(&Coord::new(row, col)).notate())
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("/")
    }
}

/// Parses a position string, rejecting ragged rows and pieces that would float above an empty cell.
impl std::str::FromStr for Board {
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let pattern = Regex::new(r"^[RYry.]+(/[RYry.]+)*$")?;
        let s = s.trim();
        if !pattern.is_match(s) {
            return Err(anyhow!("could not parse position {s}"));
        }

        let rows = s.split('/').map(|row| row.chars().collect::<Vec<char>>()).collect::<Vec<_>>();
        let width = rows[0].len();
        if let Some(ragged) = rows.iter().position(|row| row.len() != width) {
            return Err(anyhow!("row {ragged} has {} cells, expected {width}", rows[ragged].len()));
        }

        let mut board = Board::new(rows.len(), width)?;
        for col in 0..width {
            let mut gap: Option<usize> = None;
            for row in (0..rows.len()).rev() {
                match (Piece::parse(rows[row][col])?, gap) {
                    (Some(_), Some(below)) => {
                        return Err(anyhow!("piece at {} floats above the empty cell at row {below}", Coord::new(row, col)));
                    },
                    (Some(piece), None) => { board.drop_piece(col, piece)?; },
                    (None, None)        => { gap = Some(row); },
                    (None, Some(_))     => {},
                }
            }
        }
        Ok(board)
    }
}
