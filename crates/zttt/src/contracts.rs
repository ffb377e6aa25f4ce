//! Contract-based validation for moves.
//!
//! Preconditions are always checked and reject the move before any mutation.
//! Postconditions re-verify the board invariants after the move in debug
//! builds.

use super::action::Move;
use super::error::GameError;
use super::invariants::{BoardInvariants, InvariantSet};
use super::{BoardState, Square};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

/// Precondition: the game has not finished.
pub struct GameInProgress;

impl GameInProgress {
    /// Rejects any move on a finished game.
    pub fn check(board: &BoardState) -> Result<(), GameError> {
        if board.is_in_progress() {
            Ok(())
        } else {
            Err(GameError::NotInProgress)
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects a move onto an occupied cell.
    pub fn check(mov: &Move, board: &BoardState) -> Result<(), GameError> {
        if board.square(mov.position).is_empty() {
            Ok(())
        } else {
            Err(GameError::invalid_input("Position Already Taken"))
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects a move by the player not on turn.
    pub fn check(mov: &Move, board: &BoardState) -> Result<(), GameError> {
        if mov.player == board.turn() {
            Ok(())
        } else {
            Err(GameError::WrongTurn(mov.player))
        }
    }
}

/// Composite precondition: in progress, empty square, player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    pub fn check(mov: &Move, board: &BoardState) -> Result<(), GameError> {
        GameInProgress::check(board)?;
        SquareIsEmpty::check(mov, board)?;
        PlayersTurn::check(mov, board)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Postconditions:
/// - Board invariants hold
/// - Exactly one previously empty square was filled
pub struct MoveContract;

impl Contract<BoardState, Move> for MoveContract {
    fn pre(board: &BoardState, action: &Move) -> Result<(), GameError> {
        LegalMove::check(action, board)
    }

    #[instrument(skip_all)]
    fn post(before: &BoardState, after: &BoardState) -> Result<(), GameError> {
        BoardInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Board invariant violated");
            GameError::bad_parameter(format!("Postcondition failed: {}", descriptions))
        })?;

        let changed = before
            .squares()
            .iter()
            .zip(after.squares())
            .filter(|(old, new)| old != new)
            .count();
        let overwritten = before
            .squares()
            .iter()
            .zip(after.squares())
            .any(|(old, new)| *old != Square::Empty && old != new);

        if changed != 1 || overwritten {
            warn!(changed, overwritten, "Board monotonicity violated");
            return Err(GameError::bad_parameter(
                "Postcondition failed: a move must fill exactly one empty square",
            ));
        }
        Ok(())
    }
}
