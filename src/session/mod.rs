mod collaborators;
mod turn;

use rand::Rng;

use crate::agent::{Difficulty, Participant, SearchOptions};
use crate::connect_four::prelude::*;

pub use collaborators::{GameEvent, InputSource, Renderer};
pub use turn::{Turn, TurnController};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Piece),
    Draw,
}

/// A participant and the number of games they have won this session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Seat {
    pub participant: Participant,
    pub score: u32,
}

impl Seat {
    pub fn new(participant: Participant) -> Seat {
        Seat { participant, score: 0 }
    }
}

/// Everything that outlives a single game: the two seats, their scores and the game counters.
/// The board is replaced between games.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    player: Seat,
    computer: Seat,
    search: SearchOptions,
    games_played: u32,
    draws: u32,
    last_outcome: Option<Outcome>,
}

impl GameSession {
    /// Creates a session where the human plays Red and the computer plays Yellow.
    pub fn new(height: usize, width: usize, label: &str, difficulty: Difficulty, search: SearchOptions) -> Result<GameSession> {
        Ok(GameSession::with_seats(
            Board::new(height, width)?,
            Participant::human(label, Piece::Red),
            Participant::computer(difficulty, Piece::Yellow),
            search,
        ))
    }

    /// Creates a session from explicit participants, starting on `board`.
    pub fn with_seats(board: Board, player: Participant, computer: Participant, search: SearchOptions) -> GameSession {
        debug_assert_ne!(player.piece(), computer.piece(), "both seats hold the same colour");
        GameSession {
            board,
            player: Seat::new(player),
            computer: Seat::new(computer),
            search,
            games_played: 0,
            draws: 0,
            last_outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn player(&self) -> &Seat {
        &self.player
    }

    pub fn computer(&self) -> &Seat {
        &self.computer
    }

    /// The seat whose move it is on `turn`.
    pub fn seat(&self, turn: Turn) -> &Seat {
        match turn {
            Turn::Player   => &self.player,
            Turn::Computer => &self.computer
        }
    }

    pub fn search_options(&self) -> SearchOptions {
        self.search
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    /// The participant holding `piece`.
    pub fn participant(&self, piece: Piece) -> &Participant {
        if self.player.participant.piece() == piece { &self.player.participant } else { &self.computer.participant }
    }

    /// Replaces the board with an empty one of the same size, keeping seats and scores.
    pub fn reset(&mut self) {
        self.board = self.board.cleared();
    }

    /// Books a finished game.
    pub fn record(&mut self, outcome: Outcome) {
        self.games_played += 1;
        self.last_outcome = Some(outcome);
        match outcome {
            Outcome::Winner(piece) if self.player.participant.piece() == piece => self.player.score += 1,
            Outcome::Winner(_) => self.computer.score += 1,
            Outcome::Draw => self.draws += 1,
        }
        log::info!(
            "game {} over ({outcome:?}); {} {} - {} {}, {} draws",
            self.games_played,
            self.player.participant.label(),
            self.player.score,
            self.computer.participant.label(),
            self.computer.score,
            self.draws
        );
    }

    /// Plays one game on the current board with a coin flip for the first move.
    pub fn play<I, D, R>(&mut self, input: &mut I, renderer: &mut D, rng: &mut R) -> Result<Outcome>
    where
        I: InputSource + ?Sized,
        D: Renderer + ?Sized,
        R: Rng + ?Sized,
    {
        TurnController::new(self, rng).run(input, renderer, rng)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::{rngs::StdRng, SeedableRng};

    use crate::prelude::*;

    /// Replays a fixed list of human columns.
    struct ScriptedInput(VecDeque<usize>);

    impl InputSource for ScriptedInput {
        fn choose_column(&mut self, board: &Board, _piece: Piece) -> Result<usize> {
            let column = self.0.pop_front().ok_or(anyhow!("script exhausted"))?;
            assert!(board.has_space(column), "script chose full column {column}");
            Ok(column)
        }
    }

    /// Keeps the text of every event and the number of renders.
    #[derive(Default)]
    struct Recorder {
        renders: usize,
        events: Vec<String>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, _board: &Board, _highlight: Option<usize>) -> Result<()> {
            self.renders += 1;
            Ok(())
        }

        fn event(&mut self, event: &GameEvent<'_>) -> Result<()> {
            self.events.push(match event {
                GameEvent::Started { first }                  => format!("start {}", first.label()),
                GameEvent::Moved { participant, column, .. } => format!("{} {column}", participant.label()),
                GameEvent::Finished { outcome, .. }          => format!("end {outcome:?}"),
            });
            Ok(())
        }
    }

    fn session(difficulty: Difficulty) -> GameSession {
        GameSession::new(6, 7, "Ada", difficulty, SearchOptions::new()).unwrap()
    }

    /// Replays scripted columns, skipping any that have filled up, then falls back to the first open column.
    struct ScriptedFallback(VecDeque<usize>);

    impl InputSource for ScriptedFallback {
        fn choose_column(&mut self, board: &Board, _piece: Piece) -> Result<usize> {
            while let Some(column) = self.0.pop_front() {
                if board.has_space(column) {
                    return Ok(column);
                }
            }
            board.empty_columns().first().copied().ok_or(anyhow!("no columns left"))
        }
    }

    #[test]
    fn turns_alternate_until_the_game_ends() {
        let mut session = session(Difficulty::Easy);
        let mut rng = StdRng::seed_from_u64(3);
        let mut recorder = Recorder::default();
        let mut input = ScriptedFallback(VecDeque::from(vec![0; 6]));

        let controller = TurnController::with_first(&mut session, Turn::Player);
        assert_eq!(controller.turn(), Turn::Player);
        let outcome = controller.run(&mut input, &mut recorder, &mut rng).unwrap();

        let moves = recorder.events[1..recorder.events.len() - 1].to_vec();
        assert_eq!(recorder.events[0], "start Ada");
        for (i, mv) in moves.iter().enumerate() {
            let expected = if i % 2 == 0 { "Ada " } else { "Computer " };
            assert!(mv.starts_with(expected), "move {i} was {mv}");
        }
        assert_eq!(recorder.events.last().unwrap(), &format!("end {outcome:?}"));
        assert_eq!(recorder.renders, moves.len() + 1);
        assert_eq!(session.board().piece_count(), moves.len());
        assert!(session.board().is_terminal());
        assert_eq!(session.games_played(), 1);
        assert_eq!(session.last_outcome(), Some(outcome));
    }

    #[test]
    fn outcomes_are_booked_to_the_right_seat() {
        let mut session = session(Difficulty::Hard);
        let mut rng = StdRng::seed_from_u64(11);
        let mut recorder = Recorder::default();
        let mut input = ScriptedFallback(VecDeque::from(vec![3, 2, 1, 0, 5, 6, 4]));

        let outcome = TurnController::with_first(&mut session, Turn::Player)
            .run(&mut input, &mut recorder, &mut rng)
            .unwrap();

        assert_eq!(session.games_played(), 1);
        assert_eq!(session.last_outcome(), Some(outcome));
        let (player, computer, draws) = match outcome {
            Outcome::Winner(Piece::Red)    => (1, 0, 0),
            Outcome::Winner(Piece::Yellow) => (0, 1, 0),
            Outcome::Draw                  => (0, 0, 1),
        };
        assert_eq!((session.player().score, session.computer().score, session.draws()), (player, computer, draws));
    }

    #[test]
    fn reset_keeps_scores_and_identities() {
        let mut session = session(Difficulty::Hard);
        session.board_mut().drop_piece(3, Piece::Red).unwrap();
        session.record(Outcome::Winner(Piece::Red));
        session.record(Outcome::Winner(Piece::Yellow));
        session.record(Outcome::Draw);
        session.reset();

        assert_eq!(session.board(), &Board::new(6, 7).unwrap());
        assert_eq!(session.player().score, 1);
        assert_eq!(session.computer().score, 1);
        assert_eq!(session.draws(), 1);
        assert_eq!(session.games_played(), 3);
        assert_eq!(session.last_outcome(), Some(Outcome::Draw));
        assert_eq!(session.player().participant.label(), "Ada");
        assert_eq!(session.participant(Piece::Yellow).label(), "Computer");
    }

    #[test]
    fn computer_finishes_a_game_against_itself() {
        // Two computers in both seats: no human input is ever requested.
        let board = Board::new(4, 4).unwrap();
        let mut session = GameSession::with_seats(
            board,
            Participant::computer(Difficulty::Easy, Piece::Red),
            Participant::computer(Difficulty::Hard, Piece::Yellow),
            SearchOptions::new().with_max_depth(2),
        );
        let mut rng = StdRng::seed_from_u64(5);
        let mut input = ScriptedInput(VecDeque::new());

        for _ in 0..3 {
            session.play(&mut input, &mut Recorder::default(), &mut rng).unwrap();
            assert!(session.board().is_terminal());
            session.reset();
        }
        assert_eq!(session.games_played(), 3);
        assert_eq!(session.player().score + session.computer().score + session.draws(), 3);
    }

    #[test]
    fn full_board_is_rejected_before_asking_for_a_move() {
        let board: Board = "RY/YR".parse().unwrap();
        let mut session = GameSession::with_seats(
            board,
            Participant::human("Ada", Piece::Red),
            Participant::computer(Difficulty::Easy, Piece::Yellow),
            SearchOptions::new(),
        );
        let mut rng = StdRng::seed_from_u64(5);
        let mut controller = TurnController::with_first(&mut session, Turn::Computer);
        let err = controller
            .step(&mut ScriptedInput(VecDeque::new()), &mut Recorder::default(), &mut rng)
            .unwrap_err();
        assert_eq!(err.downcast_ref::<MoveError>(), Some(&MoveError::NoLegalMoves));
    }

    #[test]
    fn coin_flip_picks_both_sides() {
        let mut rng = StdRng::seed_from_u64(9);
        let flips = (0..64).map(|_| Turn::coin_flip(&mut rng)).collect::<Vec<_>>();
        assert!(flips.contains(&Turn::Player));
        assert!(flips.contains(&Turn::Computer));
        assert_eq!(Turn::Player.next(), Turn::Computer);
        assert_eq!(Turn::Computer.next(), Turn::Player);
    }
}
