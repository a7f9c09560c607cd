use rand::Rng;

use crate::agent::choose_move;
use crate::connect_four::prelude::*;

use super::{GameEvent, GameSession, InputSource, Outcome, Renderer};

/// Whose move it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Player,
    Computer,
}

impl Turn {
    /// A fair coin flip for who moves first.
    pub fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> Turn {
        if rng.random_bool(0.5) { Turn::Player } else { Turn::Computer }
    }

    pub fn next(self) -> Turn {
        match self {
            Turn::Player   => Turn::Computer,
            Turn::Computer => Turn::Player
        }
    }
}

/// Alternates turns on a session's board until the game ends.
pub struct TurnController<'s> {
    session: &'s mut GameSession,
    turn: Turn,
}

impl<'s> TurnController<'s> {
    /// Starts a game on the session's current board, flipping a coin for the first move.
    pub fn new<R: Rng + ?Sized>(session: &'s mut GameSession, rng: &mut R) -> TurnController<'s> {
        TurnController::with_first(session, Turn::coin_flip(rng))
    }

    /// Starts a game on the session's current board with a chosen first mover.
    pub fn with_first(session: &'s mut GameSession, first: Turn) -> TurnController<'s> {
        TurnController { session, turn: first }
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Plays the game out, records the result on the session and returns it.
    pub fn run<I, D, R>(mut self, input: &mut I, renderer: &mut D, rng: &mut R) -> Result<Outcome>
    where
        I: InputSource + ?Sized,
        D: Renderer + ?Sized,
        R: Rng + ?Sized,
    {
        let first = self.session.seat(self.turn).participant.clone();
        log::info!("{} ({}) moves first on a {}x{} board", first.label(), first.piece(), self.session.board().height(), self.session.board().width());
        renderer.event(&GameEvent::Started { first: &first })?;
        renderer.render(self.session.board(), None)?;

        let outcome = loop {
            if let Some(outcome) = self.step(input, renderer, rng)? {
                break outcome;
            }
        };

        self.session.record(outcome);
        let winner = match outcome {
            Outcome::Winner(piece) => Some(self.session.participant(piece)),
            Outcome::Draw          => None,
        };
        renderer.event(&GameEvent::Finished { outcome, winner })?;
        Ok(outcome)
    }

    /// Plays one move. Returns the outcome if that move ended the game, otherwise passes the turn.
    pub fn step<I, D, R>(&mut self, input: &mut I, renderer: &mut D, rng: &mut R) -> Result<Option<Outcome>>
    where
        I: InputSource + ?Sized,
        D: Renderer + ?Sized,
        R: Rng + ?Sized,
    {
        if self.session.board().is_full() {
            return Err(MoveError::NoLegalMoves.into());
        }

        let mover = self.session.seat(self.turn).participant.clone();
        let options = self.session.search_options();
        let board = self.session.board_mut();

        let column = choose_move(&mover, board, input, rng, options)?;
        let row = board.drop_piece(column, mover.piece())?;
        log::debug!("{} dropped {} into column {column}: {}", mover.label(), mover.piece(), board.notate());

        renderer.event(&GameEvent::Moved { participant: &mover, column, row })?;
        renderer.render(board, Some(column))?;

        if let Some(winner) = board.check_winner() {
            return Ok(Some(Outcome::Winner(winner)));
        }
        if board.is_full() {
            return Ok(Some(Outcome::Draw));
        }
        self.turn = self.turn.next();
        Ok(None)
    }
}
