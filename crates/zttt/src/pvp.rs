//! Two human players sharing one board.

use super::error::GameError;
use super::position::{IntoPosition, Position};
use super::{BoardState, Observers};
use tracing::instrument;

/// A player-vs-player game: each move goes to whoever is on turn.
#[derive(Debug, Default)]
pub struct PvP {
    board: BoardState,
    observers: Observers,
}

impl PvP {
    /// Creates a new game with no-op observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new game reporting to `observers`.
    pub fn with_observers(observers: Observers) -> Self {
        Self {
            board: BoardState::new(),
            observers,
        }
    }

    /// The board.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// The observers, for replacing callbacks mid-game.
    pub fn observers_mut(&mut self) -> &mut Observers {
        &mut self.observers
    }

    /// Plays a move for the player on turn.
    ///
    /// # Errors
    ///
    /// See [`BoardState::play`].
    #[instrument(skip(self, input))]
    pub fn play(&mut self, input: impl IntoPosition) -> Result<Position, GameError> {
        let player = self.board.turn();
        self.board.play(player, input, &mut self.observers)
    }
}
