use itertools::Itertools;

use crate::connect_four::prelude::*;

use super::Evaluator;

/// Search parameters for the hard computer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// The ply at which the search stops recursing and evaluates instead.
    pub max_depth: usize,

    /// Whether or not to cut off siblings once alpha meets beta.
    pub pruning: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions { max_depth: DEFAULT_MAX_DEPTH, pruning: true }
    }
}

impl SearchOptions {
    pub fn new() -> SearchOptions {
        SearchOptions::default()
    }

    pub fn with_max_depth(self, max_depth: usize) -> SearchOptions {
        SearchOptions { max_depth, ..self }
    }

    pub fn without_pruning(self) -> SearchOptions {
        SearchOptions { pruning: false, ..self }
    }
}

/// A column together with its minimax score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub column: usize,
    pub score: i32,
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// The search walks hypothetical positions on the live board through tentative drops, so every
/// drop made while descending has been undone by the time a call returns.
#[derive(Clone, Debug)]
pub struct Search {
    options: SearchOptions,
    evaluator: Evaluator,
    nodes: u64,
}

impl Search {
    /// Creates a search playing `computer` against the other colour.
    pub fn new(options: SearchOptions, computer: Piece) -> Search {
        Search { options, evaluator: Evaluator::new(computer), nodes: 0 }
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// The number of positions visited by the most recent call to `best_move`.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Picks the computer's column. Candidates are visited center-out and the first one with the
    /// strictly highest score is kept, so ties go to the column nearest the middle.
    pub fn best_move(&mut self, board: &mut Board) -> Result<ScoredMove> {
        self.nodes = 0;
        let candidates = center_out(board.width()).filter(|&column| board.has_space(column)).collect::<Vec<_>>();

        let mut best: Option<ScoredMove> = None;
        for column in candidates {
            let score = {
                let mut child = board.tentative(column, self.evaluator.computer())?;
                self.minimax(&mut child, false, 1, i32::MIN, i32::MAX)?
            };
            log::trace!("candidate column {column} scores {score}");
            if best.is_none_or(|b| score > b.score) {
                best = Some(ScoredMove { column, score });
            }
        }

        let best = best.ok_or(MoveError::NoLegalMoves)?;
        log::debug!(
            "best move is column {} scoring {} after {} nodes in {}",
            best.column,
            best.score,
            self.nodes,
            board.notate()
        );
        Ok(best)
    }

    /// Scores the position reached so far. `depth` is the number of plies already played below the root.
    pub fn minimax(&mut self, board: &mut Board, maximizing: bool, depth: usize, mut alpha: i32, mut beta: i32) -> Result<i32> {
        self.nodes += 1;

        if let Some(winner) = board.check_winner() {
            // faster wins and slower losses score further from zero
            let swing = WIN_SCORE - depth as i32 * DEPTH_PENALTY;
            return Ok(if winner == self.evaluator.computer() { swing } else { -swing });
        }
        if board.is_full() {
            return Ok(0);
        }
        if depth >= self.options.max_depth {
            return Ok(self.evaluator.evaluate(board));
        }

        let piece = if maximizing { self.evaluator.computer() } else { self.evaluator.human() };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for column in board.empty_columns() {
            let score = {
                let mut child = board.tentative(column, piece)?;
                self.minimax(&mut child, !maximizing, depth + 1, alpha, beta)?
            };
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if self.options.pruning && beta <= alpha {
                break;
            }
        }
        Ok(best)
    }
}

/// Columns ordered from the middle outwards: `width / 2`, then one right, one left, two right, and so on.
pub fn center_out(width: usize) -> impl Iterator<Item = usize> {
    let mid = width / 2;
    std::iter::once(mid)
        .filter(move |&column| column < width)
        .chain((mid + 1..width).interleave((0..mid).rev()))
}
