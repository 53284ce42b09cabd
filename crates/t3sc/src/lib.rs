//! Scalable tic-tac-toe rules engine.
//!
//! Tracks an N×N board, validates moves, alternates turns and detects wins
//! along rows, columns and both diagonals. Presentation is left to callers:
//! they construct a [`GameState`], call [`GameState::make_move`] and render
//! from [`GameState::board`].
//!
//! # Example
//!
//! ```
//! use t3sc::{GameState, Player, TurnResult};
//!
//! let mut game = GameState::new(3)?;
//! assert_eq!(game.make_move(0, 0), TurnResult::Success);
//! assert_eq!(game.current_turn(), Player::Two);
//! assert_eq!(game.make_move(0, 0), TurnResult::Failure);
//! # Ok::<(), t3sc::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
pub mod rules;
mod types;

pub use error::GameError;
pub use game::{GameState, GameStatus, Move, TurnResult};
pub use types::{Board, Cell, Coord, Player};
