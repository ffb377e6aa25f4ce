//! Win detection by line sums.
//!
//! With empty = 0, player two = 1 and player one = 4, the sum of a line's three
//! cells names its occupancy exactly. Only 3 and 12 are winning sums; 2 and 8
//! are "one move from winning" for player two and player one.

use super::super::lines::{self, Line, LINES};
use super::super::types::{P1_VALUE, P2_VALUE, Player};
use super::super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The earliest move number on which a line can be completed.
pub const FIRST_WINNING_MOVE: u8 = 5;

/// Occupancy of a line, decoded from its sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineState {
    /// No marks (sum 0).
    Open,
    /// One mark of the player, two empty cells (sum 1 or 4).
    Single(Player),
    /// Two marks of the player and one empty cell (sum 2 or 8).
    Threat(Player),
    /// One mark of each player and one empty cell (sum 5).
    Contested,
    /// Two marks of the given player blocked by the opponent (sum 6 or 9).
    Blocked(Player),
    /// Three marks of the player (sum 3 or 12).
    Won(Player),
}

impl LineState {
    /// Decodes a line sum; unreachable sums yield `None`.
    pub fn from_sum(sum: u8) -> Option<Self> {
        const P1_THREAT: u8 = 2 * P1_VALUE;
        const P1_WIN: u8 = 3 * P1_VALUE;
        const P2_THREAT: u8 = 2 * P2_VALUE;
        const P2_WIN: u8 = 3 * P2_VALUE;
        const P2_BLOCKED: u8 = 2 * P2_VALUE + P1_VALUE;
        const P1_BLOCKED: u8 = 2 * P1_VALUE + P2_VALUE;
        const CONTESTED: u8 = P1_VALUE + P2_VALUE;

        match sum {
            0 => Some(LineState::Open),
            P2_VALUE => Some(LineState::Single(Player::Two)),
            P1_VALUE => Some(LineState::Single(Player::One)),
            P2_THREAT => Some(LineState::Threat(Player::Two)),
            P1_THREAT => Some(LineState::Threat(Player::One)),
            CONTESTED => Some(LineState::Contested),
            P2_BLOCKED => Some(LineState::Blocked(Player::Two)),
            P1_BLOCKED => Some(LineState::Blocked(Player::One)),
            P2_WIN => Some(LineState::Won(Player::Two)),
            P1_WIN => Some(LineState::Won(Player::One)),
            _ => None,
        }
    }

    /// True when no further mark can change who may win this line.
    pub fn is_dead(self) -> bool {
        matches!(self, LineState::Contested | LineState::Blocked(_) | LineState::Won(_))
    }
}

/// Sum of a line's cell values.
pub fn line_sum(cells: &[u8; 9], line: Line) -> u8 {
    line.iter().map(|&i| cells[i]).sum()
}

/// Finds the lines through `pos` completed by the move just played there.
///
/// `move_number` is the number of that move; nothing can be complete before
/// move 5. All winning lines are returned, since the final move can close two
/// at once.
#[instrument(skip(cells))]
pub fn winning_lines(cells: &[u8; 9], pos: Position, move_number: u8) -> Vec<Line> {
    if move_number < FIRST_WINNING_MOVE {
        return Vec::new();
    }

    let value = cells[pos.to_index()];
    let won: Vec<Line> = lines::partners(pos)
        .iter()
        .filter(|&&(a, b)| {
            let sum = value + cells[a] + cells[b];
            sum == 3 * P1_VALUE || sum == 3 * P2_VALUE
        })
        .map(|&pair| lines::line_through(pos, pair))
        .collect();

    if !won.is_empty() {
        debug!(?won, "Winning line(s) closed");
    }
    won
}

/// Checks the whole board for a winner.
///
/// Returns `Some(player)` if the player has three in a row, `None` otherwise.
pub fn check_winner(cells: &[u8; 9]) -> Option<Player> {
    LINES
        .iter()
        .find_map(|&line| match LineState::from_sum(line_sum(cells, line)) {
            Some(LineState::Won(player)) => Some(player),
            _ => None,
        })
}
