//! The authoritative game board.
//!
//! [`BoardState`] owns the cells, the move counter, the history and the
//! outcome. It is mutated only through [`BoardState::play`] (and the two
//! per-player shorthands), and is frozen once the game has finished.

use super::action::Move;
use super::contracts::{Contract, GameInProgress, MoveContract};
use super::error::GameError;
use super::position::{IntoPosition, Position};
use super::rules;
use super::types::{GameStatus, Outcome, Player, Square};
use super::Observers;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Complete state of a single game.
/// Serializable for reporting; there is no way to build one except by
/// playing moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardState {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
    /// Number of the move to be played next, starting at 1.
    move_number: u8,
    /// Empty positions in ascending order.
    empty: Vec<Position>,
    /// Positions played, in order.
    history: Vec<Position>,
    status: GameStatus,
    /// Cells of the winning line(s); empty unless someone won.
    highlighted: Vec<Position>,
}

impl BoardState {
    /// Creates an empty board with player one to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
            move_number: 1,
            empty: Position::ALL.to_vec(),
            history: Vec::new(),
            status: GameStatus::InProgress,
            highlighted: Vec::new(),
        }
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Gets the square at the given position.
    pub fn square(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Numeric snapshot of the board (0 empty, 4 player one, 1 player two).
    pub fn values(&self) -> [u8; 9] {
        self.squares.map(Square::value)
    }

    /// Game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True while moves can still be played.
    pub fn is_in_progress(&self) -> bool {
        self.status.is_in_progress()
    }

    /// The outcome, once the game has finished.
    pub fn winner(&self) -> Option<Outcome> {
        self.status.outcome()
    }

    /// Number of the move to be played next.
    pub fn move_number(&self) -> u8 {
        self.move_number
    }

    /// The player on turn.
    pub fn turn(&self) -> Player {
        Player::for_move(self.move_number)
    }

    /// Positions played so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// History paired with the player who made each move.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.history
            .iter()
            .enumerate()
            .map(|(i, &pos)| Move::new(Player::for_move(i as u8 + 1), pos))
    }

    /// The last position played.
    pub fn last_move(&self) -> Option<Position> {
        self.history.last().copied()
    }

    /// Empty positions in ascending order.
    pub fn empty_positions(&self) -> &[Position] {
        &self.empty
    }

    /// Empty corner positions.
    pub fn empty_corners(&self) -> Vec<Position> {
        self.empty.iter().copied().filter(|p| p.is_corner()).collect()
    }

    /// Empty edge positions.
    pub fn empty_edges(&self) -> Vec<Position> {
        self.empty.iter().copied().filter(|p| p.is_edge()).collect()
    }

    /// Cells of the winning line(s), sorted; empty for a draw or a live game.
    pub fn highlighted(&self) -> &[Position] {
        &self.highlighted
    }

    /// Plays a move for player one.
    pub fn play_player_one(
        &mut self,
        input: impl IntoPosition,
        observers: &mut Observers,
    ) -> Result<Position, GameError> {
        self.play(Player::One, input, observers)
    }

    /// Plays a move for player two.
    pub fn play_player_two(
        &mut self,
        input: impl IntoPosition,
        observers: &mut Observers,
    ) -> Result<Position, GameError> {
        self.play(Player::Two, input, observers)
    }

    /// Places `player`'s mark and resolves the result of the move.
    ///
    /// The checks run in order: game in progress, input is a board index, the
    /// cell is empty, it is `player`'s turn. A rejected move leaves the board
    /// untouched. On success the move observer fires, the win check runs, the
    /// move counter advances and, if the game ended, the finish observer
    /// fires. Returns the normalized position.
    ///
    /// # Errors
    ///
    /// [`GameError::NotInProgress`], [`GameError::InvalidInput`] or
    /// [`GameError::WrongTurn`] for a rejected move. In debug builds a move
    /// that breaks a board invariant is undone and reported as
    /// [`GameError::BadParameter`]; its observers will already have fired.
    #[instrument(skip(self, input, observers), fields(move_number = self.move_number))]
    pub fn play(
        &mut self,
        player: Player,
        input: impl IntoPosition,
        observers: &mut Observers,
    ) -> Result<Position, GameError> {
        GameInProgress::check(self)?;
        let pos = input.into_position()?;
        let action = Move::new(player, pos);
        MoveContract::pre(self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.squares[pos.to_index()] = Square::Occupied(player);
        self.empty.retain(|&p| p != pos);
        self.history.push(pos);
        debug!(%action, "Move applied");

        observers.moved(player, pos);

        let won = rules::winning_lines(&self.values(), pos, self.move_number);
        self.move_number += 1;

        if !won.is_empty() {
            let mut cells: Vec<Position> = won
                .iter()
                .flatten()
                .filter_map(|&i| Position::from_index(i))
                .collect();
            cells.sort();
            cells.dedup();
            self.highlighted = cells;
            self.finish(Outcome::Winner(player), observers);
        } else if self.move_number == 10 {
            self.finish(Outcome::Draw, observers);
        }

        #[cfg(debug_assertions)]
        if let Err(err) = MoveContract::post(&before, self) {
            *self = before;
            return Err(err);
        }

        Ok(pos)
    }

    fn finish(&mut self, outcome: Outcome, observers: &mut Observers) {
        self.status = GameStatus::Finished(outcome);
        info!(%outcome, highlighted = ?self.highlighted, "Game finished");
        observers.finished(outcome);
    }

    #[cfg(test)]
    pub(crate) fn corrupt_for_test(&mut self, pos: Position, player: Player) {
        self.squares[pos.to_index()] = Square::Occupied(player);
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
