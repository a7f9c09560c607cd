/// Contract violations reported by the board and the move choosers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("column {column} is outside the board (width {width})")]
    InvalidColumn { column: usize, width: usize },

    #[error("column {column} has no piece to undo")]
    EmptyColumn { column: usize },

    #[error("no legal moves remain on the board")]
    NoLegalMoves,

    #[error("a board needs positive dimensions, received {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },
}
