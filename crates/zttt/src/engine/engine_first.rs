//! Opening play when the engine moves first.
//!
//! The engine opens on a random corner. Its second move comes from a small
//! book keyed by (opening corner, opponent reply); no threats exist yet at that
//! point, so the threat engine has nothing to offer. From move 5 on it defers
//! to the threat engine and otherwise prefers corners.

use super::threats::ThreatEngine;
use super::{Strategy, pick};
use crate::error::GameError;
use crate::position::Position;
use crate::BoardState;
use rand::Rng;
use tracing::{debug, instrument};

/// Book replies for move 3, indexed by opening corner then opponent reply.
///
/// Corners are ordered 0, 2, 6, 8. The entry for the opening cell itself is
/// empty since the opponent cannot reply there.
const BOOK: [[&[usize]; 9]; 4] = [
    [&[], &[6, 4], &[6, 8], &[2, 4], &[5, 7], &[2, 4, 6], &[2, 8], &[2, 4, 6], &[2, 6]],
    [&[6, 8], &[8, 4], &[], &[0, 4, 8], &[3, 7], &[0, 4], &[0, 8], &[0, 4, 8], &[0, 6]],
    [&[2, 8], &[0, 4, 8], &[0, 8], &[8, 4], &[1, 5], &[0, 4, 8], &[], &[0, 4], &[0, 2]],
    [&[2, 6], &[2, 4, 6], &[0, 6], &[2, 4, 6], &[1, 3], &[6, 4], &[0, 2], &[2, 4], &[]],
];

/// Book replies to `reply` after the engine opened on `opening`.
pub fn book_replies(opening: Position, reply: Position) -> Vec<Position> {
    let Some(row) = Position::CORNERS.iter().position(|&c| c == opening) else {
        return Vec::new();
    };
    BOOK[row][reply.to_index()]
        .iter()
        .filter_map(|&i| Position::from_index(i))
        .collect()
}

/// Strategy state for an engine that plays first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineFirst {
    opening: Option<Position>,
}

impl EngineFirst {
    /// Fresh state for a new game.
    pub fn new() -> Self {
        Self::default()
    }

    /// The corner the engine opened on, once played.
    pub fn opening(&self) -> Option<Position> {
        self.opening
    }

    fn book_move<R: Rng + ?Sized>(&self, board: &BoardState, rng: &mut R) -> Option<Position> {
        let (opening, reply) = (self.opening?, board.last_move()?);
        let candidates: Vec<Position> = book_replies(opening, reply)
            .into_iter()
            .filter(|&p| board.square(p).is_empty())
            .collect();
        pick(rng, &candidates)
    }
}

impl Strategy for EngineFirst {
    #[instrument(skip_all, fields(move_number = board.move_number()))]
    fn choose_move<R: Rng + ?Sized>(
        &mut self,
        board: &BoardState,
        threats: &ThreatEngine,
        rng: &mut R,
    ) -> Result<Position, GameError> {
        if board.move_number() == 1 {
            let corner = pick(rng, &board.empty_corners()).ok_or(GameError::NotInProgress)?;
            self.opening = Some(corner);
            debug!(%corner, "Opening corner");
            return Ok(corner);
        }

        if board.move_number() == 3 {
            if let Some(pos) = self.book_move(board, rng) {
                debug!(%pos, "Book reply");
                return Ok(pos);
            }
        }

        if let Some(pos) = threats.best_move(&board.values(), rng)? {
            return Ok(pos);
        }

        pick(rng, &board.empty_corners())
            .or_else(|| pick(rng, board.empty_positions()))
            .ok_or(GameError::NotInProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_covers_every_reply() {
        for opening in Position::CORNERS {
            for reply in Position::ALL {
                let replies = book_replies(opening, reply);
                if reply == opening {
                    assert!(replies.is_empty());
                } else {
                    assert!(!replies.is_empty(), "{opening} / {reply}");
                    assert!(!replies.contains(&reply));
                    assert!(!replies.contains(&opening));
                }
            }
        }
    }

    #[test]
    fn test_book_entries() {
        assert_eq!(
            book_replies(Position::TopLeft, Position::Center),
            vec![Position::MiddleRight, Position::BottomCenter]
        );
        assert_eq!(
            book_replies(Position::BottomRight, Position::TopLeft),
            vec![Position::TopRight, Position::BottomLeft]
        );
        assert!(book_replies(Position::Center, Position::TopLeft).is_empty());
    }
}
