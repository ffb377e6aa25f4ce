//! History consistency invariant: history, empty set and cells agree.

use super::super::{BoardState, Square};
use super::Invariant;

/// Invariant: every played cell is in the history and absent from the empty
/// set, and `len(history) + len(empty) == 9`.
pub struct HistoryConsistentInvariant;

impl Invariant<BoardState> for HistoryConsistentInvariant {
    fn holds(board: &BoardState) -> bool {
        let occupied = board.squares().iter().filter(|s| **s != Square::Empty).count();

        board.history().len() + board.empty_positions().len() == 9
            && occupied == board.history().len()
            && board
                .empty_positions()
                .iter()
                .all(|pos| board.square(*pos).is_empty())
    }

    fn description() -> &'static str {
        "History and empty positions partition the occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Observers, Player, Position};

    #[test]
    fn test_empty_board_holds() {
        assert!(HistoryConsistentInvariant::holds(&BoardState::new()));
    }

    #[test]
    fn test_full_game_holds() {
        let mut board = BoardState::new();
        let mut observers = Observers::default();
        for (i, pos) in [1, 2, 3, 4, 5, 0, 6, 7, 8].into_iter().enumerate() {
            board.play(Player::for_move(i as u8 + 1), pos, &mut observers).unwrap();
            assert!(HistoryConsistentInvariant::holds(&board));
        }
    }

    #[test]
    fn test_corrupted_board_violates() {
        let mut board = BoardState::new();
        board.corrupt_for_test(Position::Center, Player::One);
        assert!(!HistoryConsistentInvariant::holds(&board));
    }
}
