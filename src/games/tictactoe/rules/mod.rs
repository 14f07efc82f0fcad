//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Nothing here is cached;
//! callers evaluate the rules fresh whenever they need a verdict.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Win, WINNING_LINES, check_winner};
