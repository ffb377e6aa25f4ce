//! Board positions and conversion of raw move requests.

use super::error::GameError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Cell 0.
    TopLeft,
    /// Cell 1.
    TopCenter,
    /// Cell 2.
    TopRight,
    /// Cell 3.
    MiddleLeft,
    /// Cell 4, the only cell on four lines.
    Center,
    /// Cell 5.
    MiddleRight,
    /// Cell 6.
    BottomLeft,
    /// Cell 7.
    BottomCenter,
    /// Cell 8.
    BottomRight,
}

impl Position {
    /// Every cell in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The four corners.
    pub const CORNERS: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// The four edges.
    pub const EDGES: [Position; 4] = [
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
    ];

    /// Human-readable name, e.g. "top left" or "center".
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 9] = [
            "top left",
            "top center",
            "top right",
            "middle left",
            "center",
            "middle right",
            "bottom left",
            "bottom center",
            "bottom right",
        ];
        LABELS[self.to_index()]
    }

    /// Row (0-2) and column (0-2) of the cell.
    pub const fn coords(self) -> (usize, usize) {
        (self.to_index() / 3, self.to_index() % 3)
    }

    /// Board index, 0-8.
    pub const fn to_index(self) -> usize {
        self as usize
    }

    /// The cell at `index`, if on the board.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// True for the middle cell.
    pub fn is_center(self) -> bool {
        self == Position::Center
    }

    /// True for the four corner cells.
    pub fn is_corner(self) -> bool {
        let index = self.to_index();
        index != 4 && index % 2 == 0
    }

    /// True for the four edge cells.
    pub fn is_edge(self) -> bool {
        self.to_index() % 2 == 1
    }

    /// The corner diagonally across the board, `None` for non-corners.
    pub fn opposite_corner(self) -> Option<Self> {
        if self.is_corner() {
            Self::from_index(8 - self.to_index())
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_index())
    }
}

impl FromStr for Position {
    type Err = GameError;

    /// Parses an integer-like string; surrounding whitespace is ignored.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let index: i64 = s
            .trim()
            .parse()
            .map_err(|_| GameError::invalid_input("Position entered must be an integer"))?;
        index.into_position()
    }
}

impl TryFrom<usize> for Position {
    type Error = GameError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Position::from_index(index).ok_or_else(|| GameError::invalid_input("Invalid Position Entered"))
    }
}

/// Conversion of a raw move request into a [`Position`].
///
/// Integers and integer-like strings are accepted; anything that is not one of
/// the nine board indices is rejected with [`GameError::InvalidInput`].
pub trait IntoPosition {
    /// Normalizes the request.
    fn into_position(self) -> Result<Position, GameError>;
}

impl IntoPosition for Position {
    fn into_position(self) -> Result<Position, GameError> {
        Ok(self)
    }
}

impl IntoPosition for usize {
    fn into_position(self) -> Result<Position, GameError> {
        Position::try_from(self)
    }
}

impl IntoPosition for u8 {
    fn into_position(self) -> Result<Position, GameError> {
        usize::from(self).into_position()
    }
}

impl IntoPosition for i32 {
    fn into_position(self) -> Result<Position, GameError> {
        i64::from(self).into_position()
    }
}

impl IntoPosition for i64 {
    fn into_position(self) -> Result<Position, GameError> {
        usize::try_from(self)
            .map_err(|_| GameError::invalid_input("Invalid Position Entered"))?
            .into_position()
    }
}

impl IntoPosition for &str {
    fn into_position(self) -> Result<Position, GameError> {
        self.parse()
    }
}

impl IntoPosition for String {
    fn into_position(self) -> Result<Position, GameError> {
        self.as_str().parse()
    }
}

impl IntoPosition for &String {
    fn into_position(self) -> Result<Position, GameError> {
        self.as_str().parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_matches_declaration_order() {
        for (index, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), index);
            assert_eq!(Position::from_index(index), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_labels_and_coords() {
        assert_eq!(Position::TopLeft.label(), "top left");
        assert_eq!(Position::BottomCenter.label(), "bottom center");
        assert_eq!(Position::MiddleRight.coords(), (1, 2));
        assert_eq!(Position::BottomLeft.coords(), (2, 0));
    }

    #[test]
    fn test_cell_classes() {
        let corners: Vec<_> = Position::iter().filter(|p| p.is_corner()).collect();
        let edges: Vec<_> = Position::iter().filter(|p| p.is_edge()).collect();
        assert_eq!(corners, Position::CORNERS);
        assert_eq!(edges, Position::EDGES);
        assert!(Position::Center.is_center());
        assert!(!Position::Center.is_corner());
        assert_eq!(Position::TopRight.opposite_corner(), Some(Position::BottomLeft));
        assert_eq!(Position::TopCenter.opposite_corner(), None);
    }

    #[test]
    fn test_parse_integer_like_strings() {
        assert_eq!(" 4 ".into_position(), Ok(Position::Center));
        assert_eq!("0".into_position(), Ok(Position::TopLeft));
        assert_eq!(String::from("8").into_position(), Ok(Position::BottomRight));
    }

    #[test]
    fn test_parse_rejects_non_integers_and_out_of_range() {
        for raw in ["x", "", "4.5", "9", "-1"] {
            assert!(
                matches!(raw.into_position(), Err(GameError::InvalidInput(_))),
                "{raw:?} should be rejected"
            );
        }
        assert!(matches!((-3_i32).into_position(), Err(GameError::InvalidInput(_))));
        assert!(matches!(12_usize.into_position(), Err(GameError::InvalidInput(_))));
    }
}
