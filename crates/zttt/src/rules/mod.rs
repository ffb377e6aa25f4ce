//! Game rules for tic-tac-toe.
//!
//! Pure functions over numeric cell snapshots. Rules are separated from board
//! storage so the threat engine can reuse the same line arithmetic.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{FIRST_WINNING_MOVE, LineState, check_winner, line_sum, winning_lines};
