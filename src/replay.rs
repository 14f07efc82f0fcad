//! Headless replay: apply a list of cells and report the result.

use crate::games::tictactoe::{Board, GameStatus, Position, Timeline};
use anyhow::{Result, anyhow};
use serde::Serialize;
use tracing::{info, instrument};

/// Outcome of replaying a move list from an empty board.
#[derive(Debug, Clone, Serialize)]
pub struct ReplaySummary {
    /// Number of moves that were actually placed.
    pub moves: usize,
    /// Final status.
    pub status: GameStatus,
    /// Winning line as board indices, if the last move completed one.
    pub winning_line: Option<[usize; 3]>,
    /// Every snapshot from game start.
    pub history: Vec<Board>,
}

impl ReplaySummary {
    /// Replays 0-based cell indices from the starting position.
    ///
    /// # Errors
    ///
    /// Fails if any index is not a board cell. Occupied cells and moves
    /// after a win are skipped, as they are during play.
    #[instrument]
    pub fn from_cells(cells: &[usize]) -> Result<Self> {
        let positions = cells
            .iter()
            .map(|&cell| {
                Position::from_index(cell)
                    .ok_or_else(|| anyhow!("Cell {} is out of range (must be 0-8)", cell))
            })
            .collect::<Result<Vec<_>>>()?;

        let timeline = Timeline::replay(positions);
        let summary = Self {
            moves: timeline.current_move(),
            status: timeline.status(),
            winning_line: timeline.highlighted_line().map(|win| win.indices()),
            history: timeline.history().to_vec(),
        };
        info!(moves = summary.moves, status = ?summary.status, "Replay finished");
        Ok(summary)
    }

    /// Plain-text report: final board, status line and move count.
    pub fn render_text(&self) -> String {
        let board = self.history.last().copied().unwrap_or_default();
        let mut out = board.display();
        out.push_str("\n\n");
        match self.status.message() {
            Some(line) => out.push_str(&line),
            None => out.push_str("In progress"),
        }
        out.push_str(&format!("\nMoves: {}\n", self.moves));
        out
    }

    /// Pretty-printed JSON report.
    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
