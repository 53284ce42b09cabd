//! Win detection logic for scalable tic-tac-toe.

use crate::{Board, Cell, Player};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Scans every row, then every column, then the main diagonal, then the
/// anti-diagonal, and returns the owner of the first full line found.
/// A board holding winning lines for both players reports whichever comes
/// first in that order.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_winner(board: &Board) -> Option<Player> {
    let n = board.size();
    let cells = board.cells();
    let at = |row: usize, col: usize| cells[row * n + col];

    // Rows
    for row in 0..n {
        if let Some(player) = line_owner((0..n).map(|col| at(row, col))) {
            return Some(player);
        }
    }

    // Columns
    for col in 0..n {
        if let Some(player) = line_owner((0..n).map(|row| at(row, col))) {
            return Some(player);
        }
    }

    // Main diagonal, (0,0) to (n-1,n-1)
    if let Some(player) = line_owner((0..n).map(|i| at(i, i))) {
        return Some(player);
    }

    // Anti-diagonal, (n-1,0) to (0,n-1)
    line_owner((0..n).map(|i| at(n - 1 - i, i)))
}

/// Returns the player owning every cell of the line, if any.
fn line_owner(mut line: impl Iterator<Item = Cell>) -> Option<Player> {
    let first = line.next()?.player()?;
    line.all(|cell| cell == Cell::Occupied(first))
        .then_some(first)
}
