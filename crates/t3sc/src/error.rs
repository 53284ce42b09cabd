//! Error types for the rules engine.

/// Errors raised while setting up a game.
///
/// Illegal moves are not errors; they are reported as
/// [`TurnResult::Failure`](crate::TurnResult::Failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The requested board has no cells.
    #[display("Board size must be at least 1, got {}", _0)]
    InvalidSize(usize),
    /// A stored board's cell list does not cover `size`×`size` cells.
    #[display("Board of size {size} needs {expected} cells, got {found}")]
    CellCountMismatch {
        /// Side length recorded in the board.
        size: usize,
        /// `size * size`.
        expected: usize,
        /// Number of cells actually present.
        found: usize,
    },
}

impl std::error::Error for GameError {}
