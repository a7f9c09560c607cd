//! Line scanning: runs of same-coloured cells along the four directions.

use crate::connect_four::prelude::*;

impl Board {
    /// Determines if `piece` has `length` consecutive cells anywhere along `direction`.
    pub fn has_run_in(&self, piece: Piece, length: usize, direction: Direction) -> bool {
        self.run_starts().any(|start| self.run_at(start, direction, piece, length))
    }

    /// Determines if `piece` has `length` consecutive cells along any direction.
    pub fn has_run(&self, piece: Piece, length: usize) -> bool {
        Direction::all().into_iter().any(|direction| self.has_run_in(piece, length, direction))
    }

    /// Finds the colour holding a winning line, if any.
    ///
    /// Directions are swept in the order of [`Direction::all`], and within a direction the start
    /// cells are visited rows top-to-bottom, then columns left-to-right, so the answer is
    /// deterministic even for a grid holding lines of both colours.
    pub fn check_winner(&self) -> Option<Piece> {
        for direction in Direction::all() {
            for start in self.run_starts() {
                if let Some(piece) = self.get_unchecked(&start).piece() {
                    if self.run_at(start, direction, piece, WIN_LENGTH) {
                        return Some(piece);
                    }
                }
            }
        }
        None
    }

    /// Every cell in scan order. Runs that would leave the board are rejected by `run_at`.
    fn run_starts(&self) -> impl Iterator<Item = Coord> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Coord::new(row, col)))
    }

    /// Determines if `length` cells starting at `start` and walking along `direction` all hold `piece`.
    /// Empty runs never count.
    fn run_at(&self, start: Coord, direction: Direction, piece: Piece, length: usize) -> bool {
        length > 0 && (0..length).all(|step| {
            start
                .shifted(direction.offset(), step)
                .filter(|coord| self.in_bounds(coord))
                .is_some_and(|coord| self.get_unchecked(&coord).piece() == Some(piece))
        })
    }
}
