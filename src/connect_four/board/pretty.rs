use itertools::Itertools;

use crate::connect_four::prelude::*;

// Width of the instruction text the board is centred against.
const SPACE_OVER: usize = 44;
const COLUMN_WIDTH: usize = 4;
const UNDERLINE: &str = "\x1b[4m";
const RESET: &str = "\x1b[0m";

impl Board {
    /// Left padding that centres the board under the instructions; wide boards are not padded.
    pub fn spacing(&self) -> usize {
        SPACE_OVER.saturating_sub(self.width * COLUMN_WIDTH + 1) / 2
    }

    /// Pretty-prints the board, optionally marking a column (usually the last one played).
    pub fn pretty(&self, highlight: Option<usize>) -> String {
        let pad = " ".repeat(self.spacing());
        let mut lines = vec![];

        if let Some(column) = highlight.filter(|&c| c < self.width) {
            lines.push(format!("{pad}{}  v", " ".repeat(column * COLUMN_WIDTH)));
        }

        for row in 0..self.height {
            let mut cells = (0..self.width).map(|col| format!("| {}", self.get_unchecked(&Coord::new(row, col))));
            if row + 1 == self.height {
                let underlined = cells.map(|cell| format!("{UNDERLINE}{cell}{RESET}")).join("");
                lines.push(format!("{pad}{underlined}{UNDERLINE}|{RESET}"));
            } else {
                lines.push(format!("{pad}{}|", cells.join("")));
            }
        }

        let labels = (1..=self.width).map(|n| format!("{:<width$}", format!("[{n}]"), width = COLUMN_WIDTH)).join("");
        lines.push(format!("{pad} {}", labels.trim_end()));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use crate::connect_four::prelude::*;

    #[test]
    fn default_board_is_centred() {
        let board = Board::new(6, 7).unwrap();
        assert_eq!(board.spacing(), 7);
        assert_eq!(Board::new(6, 12).unwrap().spacing(), 0);
    }

    #[test]
    fn renders_pieces_and_labels() {
        let board: Board = "..../..../.RY.".parse().unwrap();
        let text = board.pretty(Some(2));
        let lines = text.lines().collect::<Vec<_>>();
        let pad = " ".repeat(board.spacing());

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], format!("{pad}          v"));
        assert_eq!(lines[1], format!("{pad}|   |   |   |   |"));
        assert!(lines[3].contains(Piece::Red.glyph()));
        assert!(lines[3].contains(Piece::Yellow.glyph()));
        assert_eq!(lines[4], format!("{pad} [1] [2] [3] [4]"));
    }

    #[test]
    fn double_digit_labels_stay_aligned() {
        let board = Board::new(4, 11).unwrap();
        let text = board.pretty(None);
        let labels = text.lines().last().unwrap();
        assert!(labels.ends_with("[9] [10][11]"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn upper_rows_are_plain_and_bottom_row_is_underlined() {
        let board: Board = "R../Y../RY.".parse().unwrap();
        let text = board.pretty(None);
        let lines = text.lines().collect::<Vec<_>>();
        let pad = " ".repeat(board.spacing());

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], format!("{pad}| {}|   |   |", Piece::Red.glyph()));
        assert_eq!(lines[1], format!("{pad}| {}|   |   |", Piece::Yellow.glyph()));
        assert!(lines[2].starts_with(&format!("{pad}\x1b[4m| {}", Piece::Red.glyph())));
        assert!(lines[2].ends_with("\x1b[4m|\x1b[0m"));
    }
}
