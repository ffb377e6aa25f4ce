//! Threat detection over the still-relevant ("active") lines.
//!
//! A line with two of a player's marks and one empty cell sums to exactly
//! twice that player's cell value, so winning moves, forced blocks and forks
//! all reduce to comparing line sums.

use crate::error::GameError;
use crate::lines::{self, Line, LINES};
use crate::position::Position;
use crate::rules::FIRST_WINNING_MOVE;
use crate::types::{EMPTY_VALUE, Player, Square};
use crate::BoardState;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument, trace};

/// Validates a numeric board snapshot.
///
/// # Errors
///
/// [`GameError::BadParameter`] if the snapshot is not 9 cells long or holds a
/// value other than 0, 1 or 4.
pub fn validate_snapshot(snapshot: &[u8]) -> Result<[u8; 9], GameError> {
    let cells: [u8; 9] = snapshot.try_into().map_err(|_| {
        GameError::bad_parameter(format!(
            "The board snapshot length must be 9, got {}",
            snapshot.len()
        ))
    })?;
    if let Some(bad) = cells.iter().find(|&&v| Square::from_value(v).is_none()) {
        return Err(GameError::bad_parameter(format!(
            "Board snapshot not in the correct format, {} invalid",
            bad
        )));
    }
    Ok(cells)
}

/// Weight of a line: the sum of its cell values in `snapshot`.
///
/// # Errors
///
/// [`GameError::BadParameter`] for a malformed snapshot.
pub fn line_weight(line: Line, snapshot: &[u8]) -> Result<u8, GameError> {
    let cells = validate_snapshot(snapshot)?;
    Ok(crate::rules::line_sum(&cells, line))
}

fn empty_cell(cells: &[u8; 9], line: Line) -> Option<Position> {
    line.iter()
        .copied()
        .find(|&i| cells[i] == EMPTY_VALUE)
        .and_then(Position::from_index)
}

/// Corners where `value` would create two simultaneous threats.
///
/// Pure function: the hypothetical mark is placed on a local copy of the
/// snapshot, never on a live board.
pub fn fork_corners(cells: &[u8; 9], active: &[Line], value: u8) -> Vec<Position> {
    Position::CORNERS
        .into_iter()
        .filter(|corner| cells[corner.to_index()] == EMPTY_VALUE)
        .filter(|corner| {
            let mut scratch = *cells;
            scratch[corner.to_index()] = value;
            active
                .iter()
                .filter(|&&line| crate::rules::line_sum(&scratch, line) == 2 * value)
                .take(2)
                .count()
                == 2
        })
        .collect()
}

/// The winning lines still worth scanning in one game.
///
/// Starts with all 8 lines and only ever shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveLines {
    lines: Vec<Line>,
}

impl ActiveLines {
    /// All 8 lines.
    pub fn new() -> Self {
        Self {
            lines: LINES.to_vec(),
        }
    }

    /// The remaining lines.
    pub fn as_slice(&self) -> &[Line] {
        &self.lines
    }

    /// Number of remaining lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True once every line has been pruned.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether `line` (canonical form) is still active.
    pub fn contains(&self, line: &Line) -> bool {
        self.lines.contains(line)
    }

    /// Drops every line through `pos` whose other two cells are occupied.
    #[instrument(skip(self, cells))]
    pub fn prune(&mut self, cells: &[u8; 9], pos: Position) {
        for &(a, b) in lines::partners(pos) {
            if cells[a] != EMPTY_VALUE && cells[b] != EMPTY_VALUE {
                let line = lines::line_through(pos, (a, b));
                if let Some(index) = self.lines.iter().position(|l| *l == line) {
                    self.lines.remove(index);
                    debug!(?line, remaining = self.lines.len(), "Pruned line");
                }
            }
        }
    }
}

impl Default for ActiveLines {
    fn default() -> Self {
        Self::new()
    }
}

/// Threat analysis for the engine's side of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreatEngine {
    side: Player,
    active: ActiveLines,
}

impl ThreatEngine {
    /// Creates an engine playing `side`, with all lines active.
    pub fn new(side: Player) -> Self {
        Self {
            side,
            active: ActiveLines::new(),
        }
    }

    /// The player the engine plays.
    pub fn side(&self) -> Player {
        self.side
    }

    /// Cell value of the engine's marks.
    pub fn engine_value(&self) -> u8 {
        self.side.value()
    }

    /// Cell value of the opponent's marks.
    pub fn opponent_value(&self) -> u8 {
        self.side.opponent().value()
    }

    /// The lines still under consideration.
    pub fn active_lines(&self) -> &ActiveLines {
        &self.active
    }

    /// Updates the active lines after a move at `pos` has been applied.
    ///
    /// Pruning starts once the move counter has reached 5, i.e. from the
    /// fourth move on.
    pub fn record_move(&mut self, board: &BoardState, pos: Position) {
        if board.move_number() < FIRST_WINNING_MOVE {
            return;
        }
        self.active.prune(&board.values(), pos);
    }

    fn lines_summing_to(&self, cells: &[u8; 9], target: u8) -> impl Iterator<Item = Line> + '_ {
        let cells = *cells;
        self.active
            .as_slice()
            .iter()
            .copied()
            .filter(move |&line| crate::rules::line_sum(&cells, line) == target)
    }

    /// Empty cells that would immediately win for the engine, ascending.
    ///
    /// # Errors
    ///
    /// [`GameError::BadParameter`] for a malformed snapshot.
    #[instrument(skip(self))]
    pub fn winnable_moves(&self, snapshot: &[u8]) -> Result<Vec<Position>, GameError> {
        let cells = validate_snapshot(snapshot)?;
        let mut moves: Vec<Position> = self
            .lines_summing_to(&cells, 2 * self.engine_value())
            .filter_map(|line| empty_cell(&cells, line))
            .collect();
        moves.sort();
        moves.dedup();
        Ok(moves)
    }

    /// The empty cell of the first active line the opponent is about to win.
    ///
    /// Only the first such line is reported, even if the opponent has two.
    ///
    /// # Errors
    ///
    /// [`GameError::BadParameter`] for a malformed snapshot.
    #[instrument(skip(self))]
    pub fn danger_move(&self, snapshot: &[u8]) -> Result<Option<Position>, GameError> {
        let cells = validate_snapshot(snapshot)?;
        Ok(self
            .lines_summing_to(&cells, 2 * self.opponent_value())
            .find_map(|line| empty_cell(&cells, line)))
    }

    /// Empty corners that would give the engine two threats at once.
    ///
    /// # Errors
    ///
    /// [`GameError::BadParameter`] for a malformed snapshot.
    #[instrument(skip(self))]
    pub fn double_danger_moves(&self, snapshot: &[u8]) -> Result<Vec<Position>, GameError> {
        let cells = validate_snapshot(snapshot)?;
        Ok(fork_corners(&cells, self.active.as_slice(), self.engine_value()))
    }

    /// Picks a move by priority: win, block, fork.
    ///
    /// Ties among winning moves or forks are broken at random. Returns `None`
    /// when none of the three applies.
    ///
    /// # Errors
    ///
    /// [`GameError::BadParameter`] for a malformed snapshot.
    #[instrument(skip(self, rng))]
    pub fn best_move<R: Rng + ?Sized>(
        &self,
        snapshot: &[u8],
        rng: &mut R,
    ) -> Result<Option<Position>, GameError> {
        let winnable = self.winnable_moves(snapshot)?;
        if let Some(&pos) = winnable.choose(rng) {
            trace!(%pos, "Winning move");
            return Ok(Some(pos));
        }

        if let Some(pos) = self.danger_move(snapshot)? {
            trace!(%pos, "Blocking move");
            return Ok(Some(pos));
        }

        let forks = self.double_danger_moves(snapshot)?;
        if let Some(&pos) = forks.choose(rng) {
            trace!(%pos, "Fork move");
            return Ok(Some(pos));
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{P1_VALUE as X, P2_VALUE as O};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_snapshot_validation() {
        assert!(validate_snapshot(&[0; 9]).is_ok());
        assert!(matches!(
            validate_snapshot(&[0; 8]),
            Err(GameError::BadParameter(_))
        ));
        assert!(matches!(
            validate_snapshot(&[0, 0, 0, 0, 2, 0, 0, 0, 0]),
            Err(GameError::BadParameter(_))
        ));
        assert!(matches!(
            line_weight([0, 1, 2], &[4; 10]),
            Err(GameError::BadParameter(_))
        ));
        assert_eq!(line_weight([0, 1, 2], &[X, X, 0, 0, O, 0, 0, 0, 0]), Ok(8));
    }

    #[test]
    fn test_winnable_moves_for_player_two() {
        let engine = ThreatEngine::new(Player::Two);
        // O O . / X X . / X . .
        let cells = [O, O, 0, X, X, 0, X, 0, 0];
        assert_eq!(engine.winnable_moves(&cells), Ok(vec![Position::TopRight]));
        assert_eq!(engine.danger_move(&cells), Ok(Some(Position::MiddleRight)));
    }

    #[test]
    fn test_danger_move_reports_first_line_only() {
        let engine = ThreatEngine::new(Player::Two);
        // X X . / X . . / . . O  -> two threats, rows scanned first.
        let cells = [X, X, 0, X, 0, 0, 0, 0, O];
        assert_eq!(engine.danger_move(&cells), Ok(Some(Position::TopRight)));
    }

    #[test]
    fn test_double_danger_corner() {
        let engine = ThreatEngine::new(Player::One);
        // X O . / . O . / . . X: only corner 6 opens two lines at once.
        let cells = [X, O, 0, 0, O, 0, 0, 0, X];
        let forks = engine.double_danger_moves(&cells).unwrap();
        assert_eq!(forks, vec![Position::BottomLeft]);
    }

    #[test]
    fn test_fork_corners_does_not_mutate_input() {
        let cells = [X, 0, 0, 0, O, 0, 0, 0, X];
        let copy = cells;
        let _ = fork_corners(&cells, &LINES, X);
        assert_eq!(cells, copy);
    }

    #[test]
    fn test_best_move_priority() {
        let mut rng = StdRng::seed_from_u64(7);
        let engine = ThreatEngine::new(Player::Two);
        // Engine can win at 2 and must also block at 5: winning comes first.
        let cells = [O, O, 0, X, X, 0, X, 0, 0];
        assert_eq!(engine.best_move(&cells, &mut rng), Ok(Some(Position::TopRight)));

        // Nothing to win: block.
        let cells = [X, X, 0, 0, O, 0, 0, 0, 0];
        assert_eq!(engine.best_move(&cells, &mut rng), Ok(Some(Position::TopRight)));

        // Quiet position: no signal.
        let cells = [X, 0, 0, 0, O, 0, 0, 0, 0];
        assert_eq!(engine.best_move(&cells, &mut rng), Ok(None));
    }

    #[test]
    fn test_prune_drops_filled_lines_only() {
        let mut active = ActiveLines::new();
        let cells = [X, O, X, 0, 0, 0, 0, 0, 0];
        active.prune(&cells, Position::TopCenter);
        assert_eq!(active.len(), 7);
        assert!(!active.contains(&[0, 1, 2]));

        // Pruning again is a no-op.
        active.prune(&cells, Position::TopRight);
        assert_eq!(active.len(), 7);
    }

    #[test]
    fn test_record_move_waits_for_fourth_move() {
        let mut board = BoardState::new();
        let mut observers = crate::Observers::default();
        let mut engine = ThreatEngine::new(Player::Two);
        for pos in [0, 1, 2] {
            let played = board.play(board.turn(), pos, &mut observers).unwrap();
            engine.record_move(&board, played);
        }
        // Top row is full after move 3 but pruning has not started yet.
        assert_eq!(engine.active_lines().len(), 8);

        let played = board.play(board.turn(), 4, &mut observers).unwrap();
        engine.record_move(&board, played);
        // Column 1-4-7 still has an empty cell.
        assert_eq!(engine.active_lines().len(), 8);

        let played = board.play(board.turn(), 7, &mut observers).unwrap();
        engine.record_move(&board, played);
        assert!(!engine.active_lines().contains(&[1, 4, 7]));
    }
}
