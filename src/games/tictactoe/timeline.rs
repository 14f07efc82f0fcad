//! Game state store: snapshot history with time travel.
//!
//! A [`Timeline`] holds every board snapshot from game start up to the
//! latest move, plus the index of the snapshot currently viewed. Status,
//! turn and winner are derived from those two fields on every query.
//! The only other piece of state is the highlighted winning line, which
//! is set when a move completes a line and dropped on any jump.

use super::position::Position;
use super::rules::{Win, check_winner, is_draw};
use super::types::{Board, GameStatus, Player};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

/// What happened to a requested move.
///
/// Rejected moves are not errors: the timeline is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum MoveOutcome {
    /// The mark was placed and a new snapshot appended.
    Placed,
    /// The viewed snapshot already has a winner.
    GameOver,
    /// The square is already taken.
    Occupied,
}

/// Errors from timeline navigation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum TimelineError {
    /// Requested move index is not in history.
    #[display("Move {requested} is not in history (have {len} snapshots)")]
    OutOfRange {
        /// Index that was asked for.
        requested: usize,
        /// Number of recorded snapshots.
        len: usize,
    },
}

/// Ordered board snapshots plus the viewed move index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    history: Vec<Board>,
    current_move: usize,
    highlighted: Option<Win>,
}

impl Timeline {
    /// Creates a timeline holding only the empty starting board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            highlighted: None,
        }
    }

    /// Builds a timeline by applying `positions` in order from the start.
    ///
    /// Moves that would be ignored interactively are ignored here too.
    #[instrument(skip(positions))]
    pub fn replay(positions: impl IntoIterator<Item = Position>) -> Self {
        let mut timeline = Self::new();
        for pos in positions {
            let outcome = timeline.apply_move(pos);
            if outcome != MoveOutcome::Placed {
                debug!(position = %pos, ?outcome, "Replay move ignored");
            }
        }
        timeline
    }

    /// All recorded snapshots, game start first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Number of recorded snapshots (always at least one).
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: the starting board is never removed.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Index of the viewed snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The viewed snapshot.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Player who moves next from the viewed snapshot.
    pub fn to_move(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Winner of the viewed snapshot, evaluated fresh.
    pub fn winner(&self) -> Option<Win> {
        check_winner(self.current_board())
    }

    /// Status of the viewed snapshot.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(win) = check_winner(board) {
            GameStatus::Won(win.player())
        } else if is_draw(board, self.current_move) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Status line text: shown only when the game is won or drawn.
    pub fn status_line(&self) -> Option<String> {
        self.status().message()
    }

    /// Winning line to highlight on the board, if any.
    pub fn highlighted_line(&self) -> Option<&Win> {
        self.highlighted.as_ref()
    }

    /// Whether `pos` belongs to the highlighted winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.highlighted.is_some_and(|win| win.contains(pos))
    }

    /// Places the next player's mark at `pos`.
    ///
    /// Ignored when the viewed snapshot is already won or `pos` is taken.
    /// Otherwise any snapshots after the viewed one are discarded before
    /// the new snapshot is appended and viewed.
    #[instrument(skip(self), fields(current_move = self.current_move, history_len = self.history.len()))]
    pub fn apply_move(&mut self, pos: Position) -> MoveOutcome {
        let board = *self.current_board();

        if check_winner(&board).is_some() {
            debug!("Move ignored, game is already won");
            return MoveOutcome::GameOver;
        }
        if !board.is_empty(pos) {
            debug!("Move ignored, square is occupied");
            return MoveOutcome::Occupied;
        }

        let player = self.to_move();
        let next = board.with_mark(pos, player);

        let discarded = self.history.len() - (self.current_move + 1);
        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;
        self.highlighted = check_winner(&next);

        info!(
            player = %player,
            position = %pos,
            move_number = self.current_move,
            discarded,
            won = self.highlighted.is_some(),
            "Move placed"
        );
        MoveOutcome::Placed
    }

    /// Views the snapshot at `move_index` without touching history.
    ///
    /// Clears the highlighted line; it comes back only when a later move
    /// completes a line.
    ///
    /// # Errors
    ///
    /// Returns [`TimelineError::OutOfRange`] if `move_index` is not a
    /// recorded snapshot. The timeline is unchanged in that case.
    #[instrument(skip(self), fields(history_len = self.history.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), TimelineError> {
        if move_index >= self.history.len() {
            return Err(TimelineError::OutOfRange {
                requested: move_index,
                len: self.history.len(),
            });
        }
        self.current_move = move_index;
        self.highlighted = None;
        info!(move_index, "Jumped in history");
        Ok(())
    }

    /// Discards all history and starts over from the empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.history.clear();
        self.history.push(Board::new());
        self.current_move = 0;
        self.highlighted = None;
        info!("Game reset");
    }

    /// Label of the history control for `move_index`.
    pub fn history_label(move_index: usize) -> String {
        if move_index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Revert to Turn {}", move_index)
        }
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
