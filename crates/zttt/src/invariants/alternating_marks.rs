//! Alternating marks invariant: player one is never behind or two ahead.

use super::super::{BoardState, Player, Square};
use super::Invariant;

/// Invariant: player one's mark count minus player two's is 0 or 1.
pub struct AlternatingMarksInvariant;

impl Invariant<BoardState> for AlternatingMarksInvariant {
    fn holds(board: &BoardState) -> bool {
        let count = |player| {
            board
                .squares()
                .iter()
                .filter(|s| **s == Square::Occupied(player))
                .count()
        };
        let (ones, twos) = (count(Player::One), count(Player::Two));
        ones == twos || ones == twos + 1
    }

    fn description() -> &'static str {
        "Players alternate, starting with player one"
    }
}
