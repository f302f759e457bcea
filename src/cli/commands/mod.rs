//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod history;
pub mod maps;
pub mod percents;
pub mod play;
pub mod simulate;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

use crate::core::mode::Mode;
use crate::core::rotation::{MAX_PLAYERS, MIN_PLAYERS};
use crate::core::simulate::DEFAULT_ROUNDS;

/// Resolved paths and defaults shared by every command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppContext {
    /// Map catalog file
    pub maps_path: PathBuf,
    /// Play log file
    pub log_path: PathBuf,
    /// Lobby size when not given on the command line
    pub players: u16,
    /// Maps offered per round
    pub choices: usize,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Pick the next map interactively (default)
    Play {
        /// Lobby size
        #[arg(short, long, value_parser = clap::value_parser!(u16).range(i64::from(MIN_PLAYERS)..=i64::from(MAX_PLAYERS)))]
        players: Option<u16>,
    },

    /// Simulate many rounds and print how often each map was picked
    Simulate {
        /// Number of rounds to play
        #[arg(short, long, default_value_t = DEFAULT_ROUNDS)]
        rounds: usize,

        /// Lobby size
        #[arg(short, long, value_parser = clap::value_parser!(u16).range(i64::from(MIN_PLAYERS)..=i64::from(MAX_PLAYERS)))]
        players: Option<u16>,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show the current share of every map of a mode
    Percents {
        /// Mode name (td, dm, chaser, br, captain, siege)
        mode: Mode,

        /// Only maps that fit this many players
        #[arg(short, long)]
        players: Option<u16>,
    },

    /// List the map catalog
    Maps {
        /// Only maps of this mode
        #[arg(short, long)]
        mode: Option<Mode>,
    },

    /// Show the most recent plays
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,
    },
}

impl Commands {
    /// Execute the command
    pub fn run(self, ctx: &AppContext) -> Result<()> {
        match self {
            Self::Play { players } => play::execute(ctx, players),
            Self::Simulate {
                rounds,
                players,
                seed,
            } => simulate::execute(ctx, rounds, players, seed),
            Self::Percents { mode, players } => percents::execute(ctx, mode, players),
            Self::Maps { mode } => maps::execute(ctx, mode),
            Self::History { limit } => history::execute(ctx, limit),
        }
    }
}
