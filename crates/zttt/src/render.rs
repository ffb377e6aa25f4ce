//! Text rendering of a board.
//!
//! Glyphs are per-call configuration, so differently styled games can share
//! a process without touching each other.

use super::types::{Player, Square};
use super::BoardState;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Glyphs used for each kind of cell.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Indicators {
    /// Glyph for player one's marks.
    player_one: String,
    /// Glyph for player two's marks.
    player_two: String,
    /// Glyph for empty cells.
    empty: String,
}

impl Indicators {
    /// Creates a glyph set.
    pub fn new(
        player_one: impl Into<String>,
        player_two: impl Into<String>,
        empty: impl Into<String>,
    ) -> Self {
        Self {
            player_one: player_one.into(),
            player_two: player_two.into(),
            empty: empty.into(),
        }
    }

    /// Glyph for a square.
    pub fn glyph(&self, square: Square) -> &str {
        match square {
            Square::Empty => &self.empty,
            Square::Occupied(Player::One) => &self.player_one,
            Square::Occupied(Player::Two) => &self.player_two,
        }
    }
}

impl Default for Indicators {
    fn default() -> Self {
        Self::new("X", "O", " ")
    }
}

/// Renders the board as a boxed 3x3 grid.
pub fn render(board: &BoardState, indicators: &Indicators) -> String {
    let mut out = String::from(" _____ _____ _____\n");
    for row in board.squares().chunks(3) {
        out.push_str("|     |     |     |\n|");
        for square in row {
            out.push_str(&format!("  {}  |", indicators.glyph(*square)));
        }
        out.push_str("\n|_____|_____|_____|\n");
    }
    out
}

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render(self, &Indicators::default()))
    }
}
