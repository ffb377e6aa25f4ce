//! Core domain types for tic-tac-toe.
//!
//! Cells are stored as [`Square`]s but every square also has a numeric
//! encoding: empty is 0, player one is 4 and player two is 1. Any sum of three
//! such values along a line identifies the occupancy of that line exactly,
//! which is what the win detector and the threat engine rely on.

use serde::{Deserialize, Serialize};

/// Numeric value of an empty cell.
pub const EMPTY_VALUE: u8 = 0;
/// Numeric value of a cell held by player one.
pub const P1_VALUE: u8 = 4;
/// Numeric value of a cell held by player two.
pub const P2_VALUE: u8 = 1;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player one (moves first).
    #[display("Player 1")]
    One,
    /// Player two (moves second).
    #[display("Player 2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Numeric cell value used for line sums.
    pub const fn value(self) -> u8 {
        match self {
            Player::One => P1_VALUE,
            Player::Two => P2_VALUE,
        }
    }

    /// Player number, 1 or 2.
    pub const fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Looks a player up by number.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// The player on turn for a 1-based move number.
    pub const fn for_move(move_number: u8) -> Self {
        if move_number % 2 == 1 {
            Player::One
        } else {
            Player::Two
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Numeric encoding of the square.
    pub const fn value(self) -> u8 {
        match self {
            Square::Empty => EMPTY_VALUE,
            Square::Occupied(player) => player.value(),
        }
    }

    /// Decodes a numeric cell value, `None` for anything outside {0, 1, 4}.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            EMPTY_VALUE => Some(Square::Empty),
            P1_VALUE => Some(Square::Occupied(Player::One)),
            P2_VALUE => Some(Square::Occupied(Player::Two)),
            _ => None,
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Numeric winner: 0 for a draw, otherwise the player number.
    pub fn code(&self) -> u8 {
        match self {
            Outcome::Winner(player) => player.number(),
            Outcome::Draw => 0,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game has ended; the outcome never changes afterwards.
    Finished(Outcome),
}

impl GameStatus {
    /// True while moves can still be played.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameStatus::InProgress)
    }

    /// The outcome, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Finished(outcome) => Some(*outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_derivation() {
        assert_eq!(Player::for_move(1), Player::One);
        assert_eq!(Player::for_move(2), Player::Two);
        assert_eq!(Player::for_move(9), Player::One);
    }

    #[test]
    fn test_square_encoding() {
        assert_eq!(Square::Occupied(Player::One).value(), 4);
        assert_eq!(Square::Occupied(Player::Two).value(), 1);
        assert_eq!(Square::from_value(1), Some(Square::Occupied(Player::Two)));
        assert_eq!(Square::from_value(2), None);
    }

    #[test]
    fn test_outcome_code() {
        assert_eq!(Outcome::Draw.code(), 0);
        assert_eq!(Outcome::Winner(Player::Two).code(), 2);
        assert_eq!(Outcome::Winner(Player::One).to_string(), "Player 1 wins");
    }
}
