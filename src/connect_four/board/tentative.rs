use std::ops::{Deref, DerefMut};

use crate::connect_four::prelude::*;

/// A drop that is undone when the guard goes out of scope.
///
/// The guard mutably borrows the board, so a nested guard must be released before its parent;
/// at any point the number of live guards equals the number of outstanding drops.
#[derive(Debug)]
pub struct TentativeDrop<'a> {
    board: &'a mut Board,
    column: usize,
    row: usize,
}

impl Board {
    /// Drops a piece for the lifetime of the returned guard.
    pub fn tentative(&mut self, column: usize, piece: Piece) -> Result<TentativeDrop<'_>> {
        let row = self.drop_piece(column, piece)?;
        Ok(TentativeDrop { board: self, column, row })
    }
}

impl TentativeDrop<'_> {
    /// The column the piece was dropped into.
    pub fn column(&self) -> usize {
        self.column
    }

    /// The row the piece landed on.
    pub fn row(&self) -> usize {
        self.row
    }
}

impl Deref for TentativeDrop<'_> {
    type Target = Board;
    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl DerefMut for TentativeDrop<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.board
    }
}

impl Drop for TentativeDrop<'_> {
    fn drop(&mut self) {
        debug_assert_eq!(
            self.board.column_height(self.column).ok(),
            Some(self.board.height() - self.row),
            "tentative drop in column {} was not the top of its column on release",
            self.column
        );
        self.board.undo_unchecked(self.column);
    }
}

#[cfg(test)]
mod tests {
    use crate::connect_four::prelude::*;

    #[test]
    fn guard_reverts_on_scope_exit() {
        let mut board = Board::new(6, 7).unwrap();
        board.drop_piece(3, Piece::Red).unwrap();
        let before = board.clone();
        {
            let mut outer = board.tentative(3, Piece::Yellow).unwrap();
            assert_eq!(outer.row(), 4);
            {
                let inner = outer.tentative(3, Piece::Red).unwrap();
                assert_eq!(inner.column(), 3);
                assert_eq!(inner.column_height(3).unwrap(), 3);
            }
            assert_eq!(outer.column_height(3).unwrap(), 2);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn guard_reverts_on_early_return() {
        fn probe(board: &mut Board) -> Option<usize> {
            for column in board.empty_columns() {
                let child = board.tentative(column, Piece::Yellow).ok()?;
                if child.has_run(Piece::Yellow, 2) {
                    return Some(column);
                }
            }
            None
        }

        let mut board: Board = "....../....../.....Y".parse().unwrap();
        let before = board.clone();
        assert_eq!(probe(&mut board), Some(4));
        assert_eq!(board, before);
    }

    #[test]
    fn failed_tentative_drop_leaves_board_untouched() {
        let mut board: Board = "R/Y".parse().unwrap();
        let before = board.clone();
        assert!(board.tentative(0, Piece::Red).is_err());
        assert_eq!(board, before);
    }
}
