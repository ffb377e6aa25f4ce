//! Opening play when the opponent moves first.
//!
//! The engine answers a center opening with a corner and anything else with
//! the center. Its second move depends on which of those happened; from move
//! 6 on it defers to the threat engine.

use super::threats::ThreatEngine;
use super::{Strategy, pick};
use crate::error::GameError;
use crate::lines::Line;
use crate::position::Position;
use crate::types::{EMPTY_VALUE, Player};
use crate::BoardState;
use rand::Rng;
use tracing::{debug, instrument};

/// Replies keyed by the two cells the opponent holds.
const PAIR_REPLIES: [((usize, usize), &[usize]); 8] = [
    // Opposite corners
    ((0, 8), &[1, 3, 5, 7]),
    ((2, 6), &[1, 3, 5, 7]),
    // Opposite edges
    ((1, 7), &[0, 2, 6, 8]),
    ((3, 5), &[0, 2, 6, 8]),
    // Adjacent edges
    ((1, 3), &[0]),
    ((1, 5), &[2]),
    ((7, 3), &[6]),
    ((7, 5), &[8]),
];

/// The lines that avoid the center, corners first and last.
const OUTER_LINES: [Line; 4] = [[0, 1, 2], [2, 5, 8], [6, 7, 8], [0, 3, 6]];

/// Strategy state for an engine that plays second.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFirst {
    center: bool,
    liberty_move: bool,
}

impl PlayerFirst {
    /// Fresh state for a new game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the opponent opened in the center.
    pub fn center(&self) -> bool {
        self.center
    }

    /// Whether move 6 should prefer edges over corners.
    pub fn liberty_move(&self) -> bool {
        self.liberty_move
    }

    /// Second engine move after a non-center opening (engine holds the center).
    ///
    /// Tries the pair table, then an outer line the opponent is about to
    /// complete, then the corner opposite the opponent's corner.
    fn non_center_second_move<R: Rng + ?Sized>(
        &mut self,
        cells: &[u8; 9],
        rng: &mut R,
    ) -> Option<Position> {
        let opponent = Player::One.value();
        let held = |i: usize| cells[i] == opponent;

        if let Some((_, replies)) = PAIR_REPLIES.iter().find(|((a, b), _)| held(*a) && held(*b)) {
            let options: Vec<Position> = replies.iter().filter_map(|&i| Position::from_index(i)).collect();
            return pick(rng, &options);
        }

        for line in OUTER_LINES {
            if crate::rules::line_sum(cells, line) != 2 * opponent {
                continue;
            }
            let [first, middle, last] = line;
            if cells[first] == EMPTY_VALUE {
                return Position::from_index(first);
            }
            if cells[last] == EMPTY_VALUE {
                return Position::from_index(last);
            }
            // Both corners taken: block on the edge and keep corners for later.
            self.liberty_move = true;
            return Position::from_index(middle);
        }

        Position::CORNERS
            .into_iter()
            .find(|c| held(c.to_index()))
            .and_then(Position::opposite_corner)
    }
}

impl Strategy for PlayerFirst {
    #[instrument(skip_all, fields(move_number = board.move_number()))]
    fn choose_move<R: Rng + ?Sized>(
        &mut self,
        board: &BoardState,
        threats: &ThreatEngine,
        rng: &mut R,
    ) -> Result<Position, GameError> {
        let cells = board.values();

        match board.move_number() {
            2 => {
                if board.last_move() == Some(Position::Center) {
                    self.center = true;
                    debug!("Opponent took the center");
                    if let Some(corner) = pick(rng, &board.empty_corners()) {
                        return Ok(corner);
                    }
                } else {
                    return Ok(Position::Center);
                }
            }
            4 if self.center => {
                if let Some(pos) = threats.danger_move(&cells)? {
                    return Ok(pos);
                }
                if let Some(corner) = pick(rng, &board.empty_corners()) {
                    return Ok(corner);
                }
            }
            4 => {
                if let Some(pos) = self.non_center_second_move(&cells, rng) {
                    debug!(%pos, liberty_move = self.liberty_move, "Second move");
                    return Ok(pos);
                }
            }
            _ => {}
        }

        if let Some(pos) = threats.best_move(&cells, rng)? {
            return Ok(pos);
        }

        let preferred = match board.move_number() {
            6 if self.liberty_move => board.empty_edges(),
            6 => board.empty_corners(),
            _ => Vec::new(),
        };
        pick(rng, &preferred)
            .or_else(|| pick(rng, board.empty_positions()))
            .ok_or(GameError::NotInProgress)
    }
}
