//! JSON summary of a finished game.

use serde::{Deserialize, Serialize};
use zttt::{BoardState, Position};

/// What `--json` prints once a game ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Cells in the order they were played.
    pub history: Vec<usize>,
    /// 0 for a draw, otherwise the winning player's number.
    pub winner: Option<u8>,
    /// Human-readable result.
    pub result: Option<String>,
    /// Cells of the winning line(s).
    pub highlighted: Vec<usize>,
}

impl GameSummary {
    /// Summarizes `board`; `winner` and `result` stay empty for a live game.
    pub fn from_board(board: &BoardState) -> Self {
        let indices = |cells: &[Position]| -> Vec<usize> { cells.iter().map(|p| p.to_index()).collect() };
        let outcome = board.winner();
        Self {
            history: indices(board.history()),
            winner: outcome.map(|o| o.code()),
            result: outcome.map(|o| o.to_string()),
            highlighted: indices(board.highlighted()),
        }
    }
}
