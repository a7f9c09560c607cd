use clap::{builder::TypedValueParser, Parser};
use rand::{rngs::StdRng, SeedableRng};

use crate::prelude::*;

/// Play Connect Four against the computer in the terminal.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct ConsoleOptions {
    /// Number of rows on the board.
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    pub height: usize,

    /// Number of columns on the board.
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    pub width: usize,

    #[arg(short, long, value_enum, default_value_t = Difficulty::Hard)]
    pub difficulty: Difficulty,

    /// How many plies the hard computer looks ahead.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH as u8, value_parser = clap::value_parser!(u8).range(1..))]
    pub depth: u8,

    /// Search every branch instead of pruning with alpha-beta.
    #[arg(long, default_value_t = false)]
    pub no_pruning: bool,

    /// Seed for a reproducible game.
    #[arg(long)]
    pub seed: Option<u64>,

    /// The name shown for the human player.
    #[arg(short, long, default_value = "Player")]
    pub name: String,

    #[arg(short, long)]
    pub log_level: Option<String>,
}

impl ConsoleOptions {
    pub fn search_options(&self) -> SearchOptions {
        let mut options = SearchOptions::new().with_max_depth(usize::from(self.depth));

        if self.no_pruning {
            options = options.without_pruning();
        }

        options
    }

    /// A fresh session with the human as Red and the computer as Yellow.
    pub fn session(&self) -> Result<GameSession> {
        GameSession::new(self.height, self.width, &self.name, self.difficulty, self.search_options())
    }

    /// The random source for coin flips and easy moves.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_os_rng()
        }
    }
}
