mod evaluator;
mod search;

use rand::{seq::IndexedRandom, Rng};

use crate::connect_four::prelude::*;
use crate::session::InputSource;

pub use evaluator::Evaluator;
pub use search::{center_out, ScoredMove, Search, SearchOptions};

/// How the computer picks its moves; fixed for a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Difficulty {
    /// Uniformly random legal columns.
    Easy,
    /// Bounded minimax search.
    Hard,
}

/// One side of the game. Each variant carries only its display label and colour;
/// the variant alone decides where moves come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Participant {
    Human { label: String, piece: Piece },
    ComputerEasy { label: String, piece: Piece },
    ComputerHard { label: String, piece: Piece },
}

impl Participant {
    pub fn human(label: impl Into<String>, piece: Piece) -> Participant {
        Participant::Human { label: label.into(), piece }
    }

    /// A computer opponent called "Computer".
    pub fn computer(difficulty: Difficulty, piece: Piece) -> Participant {
        let label = "Computer".to_owned();
        match difficulty {
            Difficulty::Easy => Participant::ComputerEasy { label, piece },
            Difficulty::Hard => Participant::ComputerHard { label, piece },
        }
    }

    pub fn label(&self) -> &str {
        match self {
            | Participant::Human { label, .. }
            | Participant::ComputerEasy { label, .. }
            | Participant::ComputerHard { label, .. } => label,
        }
    }

    pub fn piece(&self) -> Piece {
        match self {
            | Participant::Human { piece, .. }
            | Participant::ComputerEasy { piece, .. }
            | Participant::ComputerHard { piece, .. } => *piece,
        }
    }

    pub fn is_computer(&self) -> bool {
        !matches!(self, Participant::Human { .. })
    }
}

/// Picks the next column for `participant`: the human's comes from `input`, the easy computer's
/// from `rng`, and the hard computer's from a search bounded by `options`.
pub fn choose_move<I, R>(
    participant: &Participant, board: &mut Board, input: &mut I, rng: &mut R, options: SearchOptions,
) -> Result<usize>
where
    I: InputSource + ?Sized,
    R: Rng + ?Sized,
{
    if board.is_full() {
        return Err(MoveError::NoLegalMoves.into());
    }
    match participant {
        Participant::Human { piece, .. }        => input.choose_column(board, *piece),
        Participant::ComputerEasy { .. }        => random_move(board, rng),
        Participant::ComputerHard { piece, .. } => Ok(Search::new(options, *piece).best_move(board)?.column),
    }
}

/// Picks a legal column uniformly at random.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<usize> {
    board.empty_columns().choose(rng).copied().ok_or_else(|| MoveError::NoLegalMoves.into())
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::prelude::*;

    struct NoInput;

    impl InputSource for NoInput {
        fn choose_column(&mut self, _board: &Board, _piece: Piece) -> Result<usize> {
            Err(anyhow!("no human here"))
        }
    }

    #[test]
    fn participants_expose_label_and_piece() {
        let human = Participant::human("Ada", Piece::Red);
        let computer = Participant::computer(Difficulty::Hard, Piece::Yellow);
        assert_eq!(human.label(), "Ada");
        assert_eq!(human.piece(), Piece::Red);
        assert!(!human.is_computer());
        assert_eq!(computer.label(), "Computer");
        assert!(matches!(computer, Participant::ComputerHard { piece: Piece::Yellow, .. }));
        assert!(matches!(Participant::computer(Difficulty::Easy, Piece::Red), Participant::ComputerEasy { .. }));
    }

    #[test]
    fn easy_moves_are_legal_and_cover_every_column() {
        let mut rng = StdRng::seed_from_u64(7);
        let board: Board = "R.R.R/Y.Y.Y".parse().unwrap();
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..200 {
            let column = random_move(&board, &mut rng).unwrap();
            assert!(board.has_space(column));
            seen.insert(column);
        }
        assert_eq!(seen.into_iter().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn full_boards_have_no_moves() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board: Board = "RY/YR".parse().unwrap();
        let easy = Participant::computer(Difficulty::Easy, Piece::Red);
        let err = choose_move(&easy, &mut board, &mut NoInput, &mut rng, SearchOptions::new()).unwrap_err();
        assert_eq!(err.downcast_ref::<MoveError>(), Some(&MoveError::NoLegalMoves));
    }

    #[test]
    fn dispatch_follows_the_variant() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board: Board = "......./......./......./Y....../Y....../YRRR...".parse().unwrap();
        let hard = Participant::computer(Difficulty::Hard, Piece::Yellow);
        assert_eq!(choose_move(&hard, &mut board, &mut NoInput, &mut rng, SearchOptions::new()).unwrap(), 0);

        let human = Participant::human("Ada", Piece::Red);
        assert!(choose_move(&human, &mut board, &mut NoInput, &mut rng, SearchOptions::new()).is_err());
    }
}
