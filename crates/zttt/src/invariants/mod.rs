//! Board invariants, checked together after every move in debug builds.
//!
//! Each invariant is a zero-sized type; a tuple of them is an
//! [`InvariantSet`] that reports every violation at once.

/// A property of `S` that must hold between moves.
pub trait Invariant<S> {
    /// Whether the property holds for `state`.
    fn holds(state: &S) -> bool;

    /// What the property says, used in violation reports.
    fn description() -> &'static str;
}

/// A failed invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps an invariant description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    fn of<S, I: Invariant<S>>(state: &S) -> Option<Self> {
        (!I::holds(state)).then(|| Self::new(I::description()))
    }
}

/// Several invariants checked as one.
pub trait InvariantSet<S> {
    /// Every violation in declaration order, or `Ok` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv: Invariant<S>),+> InvariantSet<S> for ($($inv,)+) {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let violations: Vec<InvariantViolation> =
                    [$(InvariantViolation::of::<S, $inv>(state)),+]
                        .into_iter()
                        .flatten()
                        .collect();
                if violations.is_empty() { Ok(()) } else { Err(violations) }
            }
        }
    };
}

impl_invariant_set!(A);
impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);
impl_invariant_set!(A, B, C, D);

pub mod alternating_marks;
pub mod history_consistent;
pub mod move_counter;

pub use alternating_marks::AlternatingMarksInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use move_counter::MoveCounterInvariant;

/// All board invariants as a composable set.
pub type BoardInvariants = (
    HistoryConsistentInvariant,
    MoveCounterInvariant,
    AlternatingMarksInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardState, Observers, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_board() {
        assert!(BoardInvariants::check_all(&BoardState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut board = BoardState::new();
        let mut observers = Observers::default();
        board.play_player_one(0, &mut observers).unwrap();
        board.play_player_two(4, &mut observers).unwrap();
        board.play_player_one(2, &mut observers).unwrap();
        assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut board = BoardState::new();
        board.corrupt_for_test(Position::TopLeft, Player::Two);

        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_smaller_sets_compose() {
        type Counters = (HistoryConsistentInvariant, MoveCounterInvariant);
        assert!(Counters::check_all(&BoardState::new()).is_ok());

        let mut board = BoardState::new();
        board.corrupt_for_test(Position::Center, Player::One);
        let violations = <(AlternatingMarksInvariant,)>::check_all(&board);
        assert!(violations.is_ok());
        let violations = Counters::check_all(&board).unwrap_err();
        assert_eq!(
            violations[0].to_string(),
            HistoryConsistentInvariant::description()
        );
    }
}
