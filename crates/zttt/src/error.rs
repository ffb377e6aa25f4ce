//! Error types for the tic-tac-toe engine.

use super::types::Player;

/// Error returned when a move or query is rejected.
///
/// A rejected move never mutates the board, so callers can match on the
/// variant and simply prompt again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The game has already finished.
    #[display("Game is not in progress")]
    NotInProgress,

    /// The move target is not a board index or the cell is taken.
    #[display("Invalid input: {}", _0)]
    InvalidInput(String),

    /// The move was submitted for the player who is not on turn.
    #[display("It is currently not {}'s move", _0)]
    WrongTurn(Player),

    /// Internal misuse, e.g. a malformed board snapshot.
    #[display("Bad parameter: {}", _0)]
    BadParameter(String),
}

impl std::error::Error for GameError {}

impl GameError {
    /// Creates an [`GameError::InvalidInput`] error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates a [`GameError::BadParameter`] error.
    pub fn bad_parameter(message: impl Into<String>) -> Self {
        Self::BadParameter(message.into())
    }

    /// Whether a front end should simply prompt the user again.
    ///
    /// `BadParameter` signals a programming error rather than bad user input.
    pub fn is_recoverable_input(&self) -> bool {
        !matches!(self, GameError::BadParameter(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(GameError::NotInProgress.to_string(), "Game is not in progress");
        assert_eq!(
            GameError::invalid_input("Position Already Taken").to_string(),
            "Invalid input: Position Already Taken"
        );
        assert_eq!(
            GameError::WrongTurn(Player::Two).to_string(),
            "It is currently not Player 2's move"
        );
    }

    #[test]
    fn test_bad_parameter_is_not_user_recoverable() {
        assert!(GameError::NotInProgress.is_recoverable_input());
        assert!(GameError::WrongTurn(Player::One).is_recoverable_input());
        assert!(!GameError::bad_parameter("length").is_recoverable_input());
    }
}
