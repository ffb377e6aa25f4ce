//! Command-line interface for zttt.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use zttt::FirstMover;

/// zttt - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "zttt")]
#[command(about = "Tic-tac-toe against a friend or a near perfect engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to a TOML config file (glyphs and engine defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print a JSON summary of the game when it ends
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Two players at one keyboard
    Pvp,

    /// Play against the engine
    Pvc {
        /// Make the first move yourself
        #[arg(long, conflicts_with = "engine_first")]
        player_first: bool,

        /// Let the engine open, whatever the config file says
        #[arg(long)]
        engine_first: bool,

        /// Seed for the engine's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Watch a game of random moves
    Random {
        /// Seed for the move generator
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Command {
    /// Who opens a `pvc` game according to the flags, if they say.
    pub fn first_mover(&self) -> Option<FirstMover> {
        match self {
            Command::Pvc {
                player_first: true, ..
            } => Some(FirstMover::Player),
            Command::Pvc {
                engine_first: true, ..
            } => Some(FirstMover::Engine),
            _ => None,
        }
    }
}
