//! A human playing against the engine.

use super::engine::{FirstMover, OpponentStrategy, Strategy, ThreatEngine};
use super::error::GameError;
use super::position::{IntoPosition, Position};
use super::types::Player;
use super::{BoardState, Observers};
use derive_setters::Setters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Settings for a game against the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", strip_option)]
pub struct PvcOptions {
    /// Who opens the game.
    pub first: FirstMover,
    /// Seed for the engine's random choices; entropy when unset.
    pub seed: Option<u64>,
}

/// A player-vs-computer game.
///
/// When the engine moves first its opening is played during construction, so
/// observers passed to [`PvC::with_options`] see it.
#[derive(Debug)]
pub struct PvC {
    board: BoardState,
    threats: ThreatEngine,
    strategy: OpponentStrategy,
    observers: Observers,
    rng: StdRng,
}

impl PvC {
    /// Creates a game with no-op observers and an entropy-seeded engine.
    ///
    /// # Errors
    ///
    /// Only if the engine's opening move is rejected, which indicates a bug.
    pub fn new(first: FirstMover) -> Result<Self, GameError> {
        Self::with_options(PvcOptions::default().with_first(first), Observers::default())
    }

    /// Creates a game from options, reporting to `observers`.
    ///
    /// # Errors
    ///
    /// Only if the engine's opening move is rejected, which indicates a bug.
    #[instrument(skip(observers))]
    pub fn with_options(options: PvcOptions, observers: Observers) -> Result<Self, GameError> {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let strategy = OpponentStrategy::new(options.first);
        let mut game = Self {
            board: BoardState::new(),
            threats: ThreatEngine::new(strategy.engine_side()),
            strategy,
            observers,
            rng,
        };

        if options.first == FirstMover::Engine {
            game.play_engine()?;
        }
        Ok(game)
    }

    /// The board.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Threat analysis state, including the active lines.
    pub fn threats(&self) -> &ThreatEngine {
        &self.threats
    }

    /// The opening strategy in use.
    pub fn strategy(&self) -> &OpponentStrategy {
        &self.strategy
    }

    /// The observers, for replacing callbacks mid-game.
    pub fn observers_mut(&mut self) -> &mut Observers {
        &mut self.observers
    }

    /// True if the engine opened the game.
    pub fn engine_first(&self) -> bool {
        self.strategy.first_mover() == FirstMover::Engine
    }

    /// The side the engine plays.
    pub fn engine_side(&self) -> Player {
        self.threats.side()
    }

    /// The side the human plays.
    pub fn player_side(&self) -> Player {
        self.engine_side().opponent()
    }

    /// Plays the human's move, then the engine's reply if the game goes on.
    ///
    /// # Errors
    ///
    /// See [`BoardState::play`]. A rejected human move changes nothing.
    #[instrument(skip(self, input))]
    pub fn play(&mut self, input: impl IntoPosition) -> Result<(), GameError> {
        let pos = self.board.play(self.player_side(), input, &mut self.observers)?;
        self.threats.record_move(&self.board, pos);

        if self.board.is_in_progress() {
            self.play_engine()?;
        }
        Ok(())
    }

    fn play_engine(&mut self) -> Result<Position, GameError> {
        let choice = self
            .strategy
            .choose_move(&self.board, &self.threats, &mut self.rng)?;
        debug!(%choice, move_number = self.board.move_number(), "Engine move");

        let pos = self
            .board
            .play(self.threats.side(), choice, &mut self.observers)?;
        self.threats.record_move(&self.board, pos);
        Ok(pos)
    }
}
