//! Tic-tac-toe: board types, rules and the move timeline.

pub mod position;
pub mod rules;
pub mod timeline;
pub mod types;

pub use position::Position;
pub use rules::{Win, check_winner, is_draw, is_full};
pub use timeline::{MoveOutcome, Timeline, TimelineError};
pub use types::{Board, CELL_COUNT, GameStatus, Player, Square};
