use crate::connect_four::prelude::*;

/// The heuristic for nonterminal positions, scored from the computer's perspective.
///
/// For each direction, a three-in-a-row is worth 250 and a two-in-a-row 100, added for the
/// computer and subtracted for the human. Every column where the human could complete a line
/// with their next drop costs a further 300, whichever side is actually to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluator {
    computer: Piece,
    human: Piece,
}

impl Evaluator {
    pub fn new(computer: Piece) -> Evaluator {
        Evaluator { computer, human: -computer }
    }

    pub fn computer(&self) -> Piece {
        self.computer
    }

    pub fn human(&self) -> Piece {
        self.human
    }

    /// Scores the board. The board is only mutated through tentative drops, so it is unchanged on return.
    pub fn evaluate(&self, board: &mut Board) -> i32 {
        let runs = Direction::all().into_iter().map(|direction| {
            self.run_score(board, direction, 3, THREE_SCORE) + self.run_score(board, direction, 2, TWO_SCORE)
        }).sum::<i32>();

        runs - BLOCK_PENALTY * self.threats(board) as i32
    }

    /// The number of open columns where a human drop would immediately win.
    pub fn threats(&self, board: &mut Board) -> usize {
        board.empty_columns().into_iter().filter(|&column| {
            board.tentative(column, self.human).is_ok_and(|child| child.has_run(self.human, WIN_LENGTH))
        }).count()
    }

    fn run_score(&self, board: &Board, direction: Direction, length: usize, weight: i32) -> i32 {
        let mut score = 0;
        if board.has_run_in(self.computer, length, direction) {
            score += weight;
        }
        if board.has_run_in(self.human, length, direction) {
            score -= weight;
        }
        score
    }
}
