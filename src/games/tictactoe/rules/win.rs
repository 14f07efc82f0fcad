//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The 8 winning patterns, checked in this order.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: the winner and the three squares they hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win {
    player: Player,
    line: [Position; 3],
}

impl Win {
    /// The winning player.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The three winning positions, in pattern order.
    pub fn line(&self) -> [Position; 3] {
        self.line
    }

    /// Whether `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }

    /// The winning line as board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first pattern, in [`WINNING_LINES`] order, whose three
/// squares are held by the same player.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Win> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => Some(Win {
                player,
                line: [a, b, c],
            }),
            _ => None,
        }
    })
}
