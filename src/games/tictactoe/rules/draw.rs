//! Draw detection logic for tic-tac-toe.

use super::super::{Board, CELL_COUNT, Square};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks whether the snapshot reached after `move_number` moves is a draw.
///
/// A draw is the ninth move with no completed line.
#[instrument]
pub fn is_draw(board: &Board, move_number: usize) -> bool {
    move_number == CELL_COUNT && check_winner(board).is_none()
}
