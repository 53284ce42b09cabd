//! Game state and move application for scalable tic-tac-toe.

use crate::error::GameError;
use crate::rules::{check_winner, is_full};
use crate::types::{Board, Cell, Coord, Player};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Result of a single [`GameState::make_move`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use]
pub enum TurnResult {
    /// The mark was placed and the turn passed to the opponent.
    Success,
    /// The mark was placed and completed a line for this player.
    Winner(Player),
    /// The mark was placed and filled the board without a winner.
    Draw,
    /// Nothing changed: the cell was out of bounds or already occupied.
    Failure,
}

impl TurnResult {
    /// Returns `true` for [`TurnResult::Winner`] and [`TurnResult::Draw`].
    pub fn is_terminal(self) -> bool {
        matches!(self, TurnResult::Winner(_) | TurnResult::Draw)
    }
}

/// Current status of the game, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// An accepted move: a player placing their mark at a coordinate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new, derive_more::Display,
)]
#[display("{player} -> {coord}")]
pub struct Move {
    /// The player who placed the mark.
    pub player: Player,
    /// Where the mark was placed.
    pub coord: Coord,
}

/// Complete state of one match.
///
/// Owns the board and whose turn it is. The only mutation is
/// [`GameState::make_move`]; cells are never overwritten once occupied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game on an empty `size`×`size` board with Player 1 to move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSize`] if `size` is zero.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GameError> {
        let board = Board::new(size)?;
        info!(size, "Starting new game");
        Ok(Self {
            board,
            current_player: Player::One,
            history: Vec::new(),
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side length of the board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Returns the player whose turn it is.
    ///
    /// After a [`TurnResult::Winner`] this is still the winner, since the
    /// turn does not advance on a terminal move.
    pub fn current_turn(&self) -> Player {
        self.current_player
    }

    /// Returns accepted moves in the order they were played.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the coordinates of every empty cell in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.board.empty_cells()
    }

    /// Returns the game status as seen from the current board.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = check_winner(&self.board) {
            GameStatus::Won(winner)
        } else if is_full(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Returns [`TurnResult::Failure`] without touching the state if the cell
    /// is off the board or already occupied. Otherwise the mark is placed and
    /// the result reports a win, a draw, or success; only success passes the
    /// turn to the opponent.
    ///
    /// Calls after a terminal result are not rejected.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn make_move(&mut self, row: usize, col: usize) -> TurnResult {
        if !self.board.is_empty(row, col) {
            debug!(size = self.size(), "Rejected move");
            return TurnResult::Failure;
        }

        let mover = self.current_player;
        self.board.set(row, col, Cell::Occupied(mover));
        self.history.push(Move::new(mover, Coord::new(row, col)));

        if check_winner(&self.board) == Some(mover) {
            info!(winner = ?mover, moves = self.history.len(), "Game won");
            return TurnResult::Winner(mover);
        }

        if is_full(&self.board) {
            info!(moves = self.history.len(), "Game drawn");
            return TurnResult::Draw;
        }

        self.current_player = mover.opponent();
        debug!(next = ?self.current_player, "Move applied");
        TurnResult::Success
    }
}
