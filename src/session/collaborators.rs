use crate::agent::Participant;
use crate::connect_four::prelude::*;

use super::Outcome;

/// Supplies the human's columns. Implementations only return columns that currently have space.
pub trait InputSource {
    fn choose_column(&mut self, board: &Board, piece: Piece) -> Result<usize>;
}

/// Draws the board and reports what happens in a game. Renderers never mutate the board.
pub trait Renderer {
    fn render(&mut self, board: &Board, highlight: Option<usize>) -> Result<()>;

    fn event(&mut self, _event: &GameEvent<'_>) -> Result<()> {
        Ok(())
    }
}

/// Things worth telling the people at the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent<'a> {
    /// A game has started; `first` moves first.
    Started { first: &'a Participant },

    /// A piece was dropped and landed on `row`.
    Moved { participant: &'a Participant, column: usize, row: usize },

    /// The game is over; `winner` is unset for a draw.
    Finished { outcome: Outcome, winner: Option<&'a Participant> },
}
