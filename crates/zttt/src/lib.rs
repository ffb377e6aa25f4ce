//! zttt - a tic-tac-toe rules engine with a computer opponent
//!
//! # Architecture
//!
//! - **Board**: [`BoardState`] owns the cells, move counter, history and
//!   outcome, and validates every move before applying it
//! - **Rules**: line sums classify each of the eight lines; win detection
//!   only looks at lines through the latest move
//! - **Engine**: [`ThreatEngine`] finds wins, blocks and forks over the lines
//!   that can still matter; [`OpponentStrategy`] plays the opening
//! - **Games**: [`PvP`] and [`PvC`] drive a board for two humans or a human
//!   against the engine
//!
//! # Example
//!
//! ```
//! use zttt::{FirstMover, Outcome, PvC, PvcOptions, Observers};
//!
//! # fn example() -> Result<(), zttt::GameError> {
//! let options = PvcOptions::default().with_first(FirstMover::Player).with_seed(7);
//! let mut game = PvC::with_options(options, Observers::default())?;
//!
//! // Opening in the center; the engine answers on a corner.
//! game.play(4)?;
//! assert!(game.board().history()[1].is_corner());
//! assert!(game.board().winner() != Some(Outcome::Winner(game.player_side())));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
pub mod contracts;
pub mod engine;
mod error;
pub mod invariants;
pub mod lines;
mod observers;
mod position;
mod pvc;
mod pvp;
mod render;
pub mod rules;
mod types;

// Crate-level exports - Board and moves
pub use action::Move;
pub use board::BoardState;
pub use position::{IntoPosition, Position};
pub use types::{EMPTY_VALUE, GameStatus, Outcome, P1_VALUE, P2_VALUE, Player, Square};

// Crate-level exports - Errors
pub use error::GameError;

// Crate-level exports - Callbacks
pub use observers::{FinishObserver, MoveObserver, Observers};

// Crate-level exports - Rules
pub use lines::{LINES, Line};
pub use rules::LineState;

// Crate-level exports - Engine
pub use engine::{ActiveLines, FirstMover, OpponentStrategy, Strategy, ThreatEngine};

// Crate-level exports - Game drivers
pub use pvc::{PvC, PvcOptions};
pub use pvp::PvP;

// Crate-level exports - Rendering
pub use render::{Indicators, render};
