//! The computer opponent.
//!
//! [`ThreatEngine`] finds wins, blocks and forks over the active lines. The
//! two opening strategies decide the early moves that threat analysis cannot,
//! and [`OpponentStrategy`] selects one of them when a game is created.

pub mod engine_first;
pub mod player_first;
pub mod threats;

pub use engine_first::EngineFirst;
pub use player_first::PlayerFirst;
pub use threats::{ActiveLines, ThreatEngine};

use crate::error::GameError;
use crate::position::Position;
use crate::types::Player;
use crate::BoardState;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Who makes the first move in a game against the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstMover {
    /// The engine opens as player one.
    #[default]
    Engine,
    /// The human opens; the engine is player two.
    Player,
}

impl FirstMover {
    /// The side the engine plays.
    pub fn engine_side(self) -> Player {
        match self {
            FirstMover::Engine => Player::One,
            FirstMover::Player => Player::Two,
        }
    }
}

/// Move selection for the engine's side.
pub trait Strategy {
    /// Chooses the engine's next move on `board`, where it is the engine's turn.
    ///
    /// # Errors
    ///
    /// [`GameError::NotInProgress`] if no cell is left;
    /// [`GameError::BadParameter`] if threat analysis rejects the board.
    fn choose_move<R: Rng + ?Sized>(
        &mut self,
        board: &BoardState,
        threats: &ThreatEngine,
        rng: &mut R,
    ) -> Result<Position, GameError>;
}

/// One of the two opening strategies, fixed for the life of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpponentStrategy {
    /// Engine plays first.
    EngineFirst(EngineFirst),
    /// Opponent plays first.
    PlayerFirst(PlayerFirst),
}

impl OpponentStrategy {
    /// Fresh strategy state for a new game.
    pub fn new(first: FirstMover) -> Self {
        match first {
            FirstMover::Engine => OpponentStrategy::EngineFirst(EngineFirst::new()),
            FirstMover::Player => OpponentStrategy::PlayerFirst(PlayerFirst::new()),
        }
    }

    /// Who moves first under this strategy.
    pub fn first_mover(&self) -> FirstMover {
        match self {
            OpponentStrategy::EngineFirst(_) => FirstMover::Engine,
            OpponentStrategy::PlayerFirst(_) => FirstMover::Player,
        }
    }

    /// The side the engine plays.
    pub fn engine_side(&self) -> Player {
        self.first_mover().engine_side()
    }
}

impl Strategy for OpponentStrategy {
    fn choose_move<R: Rng + ?Sized>(
        &mut self,
        board: &BoardState,
        threats: &ThreatEngine,
        rng: &mut R,
    ) -> Result<Position, GameError> {
        match self {
            OpponentStrategy::EngineFirst(strategy) => strategy.choose_move(board, threats, rng),
            OpponentStrategy::PlayerFirst(strategy) => strategy.choose_move(board, threats, rng),
        }
    }
}

/// Uniform random choice, `None` for an empty slice.
pub(crate) fn pick<R: Rng + ?Sized>(rng: &mut R, options: &[Position]) -> Option<Position> {
    options.choose(rng).copied()
}
