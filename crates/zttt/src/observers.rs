//! Caller-supplied move and finish callbacks.

use super::position::Position;
use super::types::{Outcome, Player};

/// Callback invoked after a mark is placed.
pub type MoveObserver = Box<dyn FnMut(Player, Position)>;

/// Callback invoked once when the game ends.
pub type FinishObserver = Box<dyn FnMut(Outcome)>;

/// The two observers of a game, each a no-op by default.
///
/// Callbacks run inline while the board is mutably borrowed, so they cannot
/// play further moves on the same board.
pub struct Observers {
    on_move: MoveObserver,
    on_finish: FinishObserver,
}

impl Observers {
    /// Observers that do nothing.
    pub fn new() -> Self {
        Self {
            on_move: Box::new(|_, _| {}),
            on_finish: Box::new(|_| {}),
        }
    }

    /// Replaces the move observer (builder style).
    pub fn with_on_move(mut self, on_move: impl FnMut(Player, Position) + 'static) -> Self {
        self.set_on_move(on_move);
        self
    }

    /// Replaces the finish observer (builder style).
    pub fn with_on_finish(mut self, on_finish: impl FnMut(Outcome) + 'static) -> Self {
        self.set_on_finish(on_finish);
        self
    }

    /// Replaces the move observer.
    pub fn set_on_move(&mut self, on_move: impl FnMut(Player, Position) + 'static) {
        self.on_move = Box::new(on_move);
    }

    /// Replaces the finish observer.
    pub fn set_on_finish(&mut self, on_finish: impl FnMut(Outcome) + 'static) {
        self.on_finish = Box::new(on_finish);
    }

    pub(crate) fn moved(&mut self, player: Player, pos: Position) {
        (self.on_move)(player, pos)
    }

    pub(crate) fn finished(&mut self, outcome: Outcome) {
        (self.on_finish)(outcome)
    }
}

impl Default for Observers {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers").finish_non_exhaustive()
    }
}
