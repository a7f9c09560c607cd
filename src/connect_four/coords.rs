/// A cell on the grid. Row 0 is the top row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Constructs a new coord.
    pub fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// Walks `steps` times along `offset`, or returns None if the walk leaves the non-negative quadrant.
    /// Upper bounds are the board's concern.
    pub fn shifted(&self, offset: OffsetCoord, steps: usize) -> Option<Coord> {
        let steps = isize::try_from(steps).ok()?;
        let row = self.row.checked_add_signed(offset.rows.checked_mul(steps)?)?;
        let col = self.col.checked_add_signed(offset.cols.checked_mul(steps)?)?;
        Some(Coord { row, col })
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// Simple offset pair used to step along a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OffsetCoord {
    pub rows: isize,
    pub cols: isize,
}

/// The four directions a line can run in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalAscending,
    DiagonalDescending,
}

impl Direction {
    /// Gets the directions in scan order.
    pub fn all() -> [Direction; 4] {
        [
            Direction::Horizontal,
            Direction::Vertical,
            Direction::DiagonalAscending,
            Direction::DiagonalDescending,
        ]
    }

    /// The step that advances one cell along this direction. Since row 0 is the top,
    /// ascending diagonals move up-right and descending diagonals move down-right.
    pub fn offset(&self) -> OffsetCoord {
        match self {
            Direction::Horizontal         => OffsetCoord { rows: 0, cols: 1 },
            Direction::Vertical           => OffsetCoord { rows: 1, cols: 0 },
            Direction::DiagonalAscending  => OffsetCoord { rows: -1, cols: 1 },
            Direction::DiagonalDescending => OffsetCoord { rows: 1, cols: 1 },
        }
    }
}
