//! Move counter invariant: the counter is one ahead of the history.

use super::super::BoardState;
use super::Invariant;

/// Invariant: `move_number == len(history) + 1`.
pub struct MoveCounterInvariant;

impl Invariant<BoardState> for MoveCounterInvariant {
    fn holds(board: &BoardState) -> bool {
        usize::from(board.move_number()) == board.history().len() + 1
    }

    fn description() -> &'static str {
        "Move number is one more than the number of moves played"
    }
}
