//! Draw detection logic for tic-tac-toe.

use super::super::types::EMPTY_VALUE;
use super::win::check_winner;

/// Checks if the board is full (all squares occupied).
pub fn is_full(cells: &[u8; 9]) -> bool {
    cells.iter().all(|&v| v != EMPTY_VALUE)
}

/// A full board with no winner.
pub fn is_draw(cells: &[u8; 9]) -> bool {
    is_full(cells) && check_winner(cells).is_none()
}
