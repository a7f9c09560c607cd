/*
 *  The Connect Four game-state engine.
 */

pub(crate) mod board;
pub(crate) mod consts;
pub mod coords;
pub mod error;
pub mod notation;

pub mod prelude {
    pub(crate) use crate::utils::prelude::*;

    pub use super::{
        board::{Board, BoardCell, TentativeDrop},
        consts::*,
        coords::{self, *},
        error::MoveError,
    };
}
