//! Tic-tac-toe with move history and time travel.
//!
//! The game logic lives in [`games::tictactoe`]: immutable board
//! snapshots, win and draw rules, and a [`Timeline`] that records every
//! snapshot and lets the player jump back to any earlier one. A
//! ratatui front end ([`run_tui`]) and a headless replay
//! ([`ReplaySummary`]) sit on top.
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameStatus, Player, Position, Timeline};
//!
//! let mut timeline = Timeline::new();
//! for pos in [Position::TopLeft, Position::Center, Position::TopCenter,
//!             Position::MiddleLeft, Position::TopRight] {
//!     let _ = timeline.apply_move(pos);
//! }
//! assert_eq!(timeline.status(), GameStatus::Won(Player::X));
//!
//! timeline.jump_to(2).unwrap();
//! assert_eq!(timeline.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod games;

mod config;
mod replay;
mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};

// Crate-level exports - Headless replay
pub use replay::ReplaySummary;

// Crate-level exports - Terminal UI
pub use tui::{App, Focus, ScreenLayout, Target, digit_position, draw, hit_test, move_cursor, run_tui};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, CELL_COUNT, GameStatus, MoveOutcome, Player, Position, Square, Timeline, TimelineError,
    Win, check_winner,
};
