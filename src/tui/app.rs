//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use ratatui::layout::Rect;
use tracing::{debug, instrument, warn};

use super::input::{digit_position, move_cursor};
use super::ui::{self, Target};
use crate::games::tictactoe::{MoveOutcome, Position, Timeline};

/// Which panel receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The history list.
    History,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// Main application state.
///
/// Every mutation happens synchronously inside [`App::handle_key`] or
/// [`App::handle_mouse`]; rendering only reads.
#[derive(Debug, Getters)]
pub struct App {
    timeline: Timeline,
    cursor: Position,
    selected: usize,
    focus: Focus,
    show_cell_numbers: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application on an empty board.
    #[instrument]
    pub fn new(show_cell_numbers: bool) -> Self {
        Self {
            timeline: Timeline::new(),
            cursor: Position::Center,
            selected: 0,
            focus: Focus::default(),
            show_cell_numbers,
            should_quit: false,
        }
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        // crossterm reports both press and release on some platforms.
        if key.kind == KeyEventKind::Release {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.reset(),
            KeyCode::Char('[') => self.step_back(),
            KeyCode::Char(']') => self.step_forward(),
            KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.toggle(),
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.place(self.cursor),
                Focus::History => self.jump(self.selected),
            },
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.place(pos);
                }
            }
            code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                match self.focus {
                    Focus::Board => self.cursor = move_cursor(self.cursor, code),
                    Focus::History => self.move_selection(code),
                }
            }
            _ => {}
        }
    }

    /// Handles a mouse event against the screen drawn into `area`.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        match ui::hit_test(area, mouse.column, mouse.row, self.timeline.len()) {
            Some(Target::Reset) => self.reset(),
            Some(Target::Cell(pos)) => {
                self.focus = Focus::Board;
                self.cursor = pos;
                self.place(pos);
            }
            Some(Target::HistoryEntry(index)) => {
                self.focus = Focus::History;
                self.jump(index);
            }
            None => {}
        }
    }

    /// Places the current player's mark at `pos`, if legal.
    pub fn place(&mut self, pos: Position) {
        match self.timeline.apply_move(pos) {
            MoveOutcome::Placed => self.selected = self.timeline.current_move(),
            outcome => debug!(position = %pos, ?outcome, "Move ignored"),
        }
    }

    /// Views history entry `index`.
    pub fn jump(&mut self, index: usize) {
        match self.timeline.jump_to(index) {
            Ok(()) => self.selected = index,
            Err(e) => warn!(error = %e, "Jump rejected"),
        }
    }

    /// Starts a new game.
    pub fn reset(&mut self) {
        self.timeline.reset();
        self.selected = 0;
    }

    fn step_back(&mut self) {
        if let Some(index) = self.timeline.current_move().checked_sub(1) {
            self.jump(index);
        }
    }

    fn step_forward(&mut self) {
        let next = self.timeline.current_move() + 1;
        if next < self.timeline.len() {
            self.jump(next);
        }
    }

    fn move_selection(&mut self, key: KeyCode) {
        let last = self.timeline.len() - 1;
        self.selected = match key {
            KeyCode::Up => self.selected.saturating_sub(1),
            KeyCode::Down => (self.selected + 1).min(last),
            _ => self.selected,
        };
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(true)
    }
}
