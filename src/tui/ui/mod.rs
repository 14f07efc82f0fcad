//! UI rendering using ratatui.
//!
//! Rendering is stateless: every frame is drawn from [`App`]. The same
//! [`ScreenLayout`] is used to draw and to map mouse clicks back to
//! controls, so the two cannot drift apart.

mod board;
mod history;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, Focus};
use crate::games::tictactoe::{GameStatus, Position};

pub use board::{BOARD_HEIGHT, BOARD_WIDTH, cell_rects, render_board};
pub use history::{entry_at, render_history};

const HELP: &str = "1-9/Enter: place | Tab: focus | [ ]: step | R: reset | Q: quit";

/// Clickable control under a screen coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The reset button.
    Reset,
    /// A board square.
    Cell(Position),
    /// A history entry, by move index.
    HistoryEntry(usize),
}

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Heading.
    pub heading: Rect,
    /// Reset button.
    pub reset: Rect,
    /// Status line.
    pub status: Rect,
    /// Board panel, including its border.
    pub board: Rect,
    /// History panel, including its border.
    pub history: Rect,
    /// Key help.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into the screen regions.
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                // Heading
                Constraint::Length(3),                // Reset + status
                Constraint::Min(BOARD_HEIGHT + 2),    // Board + history
                Constraint::Length(1),                // Help
            ])
            .split(area);

        let controls = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(11),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(rows[1]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(BOARD_WIDTH + 2),
                Constraint::Length(2),
                Constraint::Min(24),
            ])
            .split(rows[2]);

        Self {
            heading: rows[0],
            reset: controls[0],
            status: controls[2],
            board: body[0],
            history: body[2],
            help: rows[3],
        }
    }

    /// Area inside the board border where the squares are drawn.
    pub fn board_inner(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.board)
    }
}

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area());
    let timeline = app.timeline();

    let heading = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(heading, layout.heading);

    let reset = Paragraph::new("Reset")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(reset, layout.reset);

    if let Some(line) = timeline.status_line() {
        let color = match timeline.status() {
            GameStatus::Won(_) => Color::Green,
            _ => Color::Yellow,
        };
        let status = Paragraph::new(line)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(status, layout.status);
    }

    let board_focused = *app.focus() == Focus::Board;
    let board_block = panel("Board", board_focused);
    frame.render_widget(board_block, layout.board);
    render_board(
        frame,
        layout.board_inner(),
        timeline,
        board_focused.then_some(*app.cursor()),
        *app.show_cell_numbers(),
    );

    let history_focused = *app.focus() == Focus::History;
    render_history(
        frame,
        layout.history,
        panel("History", history_focused),
        timeline,
        history_focused.then_some(*app.selected()),
    );

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);
}

/// Maps a screen coordinate to the control drawn there.
pub fn hit_test(area: Rect, column: u16, row: u16, history_len: usize) -> Option<Target> {
    let layout = ScreenLayout::new(area);
    let point = ratatui::layout::Position::new(column, row);

    if layout.reset.contains(point) {
        return Some(Target::Reset);
    }
    if let Some(pos) = cell_rects(layout.board_inner())
        .iter()
        .position(|rect| rect.contains(point))
        .and_then(Position::from_index)
    {
        return Some(Target::Cell(pos));
    }
    entry_at(layout.history, column, row, history_len).map(Target::HistoryEntry)
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    #[test]
    fn test_hit_reset_button() {
        let layout = ScreenLayout::new(screen());
        let target = hit_test(screen(), layout.reset.x + 1, layout.reset.y + 1, 1);
        assert_eq!(target, Some(Target::Reset));
    }

    #[test]
    fn test_hit_every_cell() {
        let layout = ScreenLayout::new(screen());
        for (idx, rect) in cell_rects(layout.board_inner()).iter().enumerate() {
            let target = hit_test(screen(), rect.x + rect.width / 2, rect.y + 1, 1);
            assert_eq!(target, Some(Target::Cell(Position::ALL[idx])));
        }
    }

    #[test]
    fn test_hit_history_entries() {
        let layout = ScreenLayout::new(screen());
        let x = layout.history.x + 2;
        let first = layout.history.y + 1;
        assert_eq!(hit_test(screen(), x, first, 3), Some(Target::HistoryEntry(0)));
        assert_eq!(hit_test(screen(), x, first + 2, 3), Some(Target::HistoryEntry(2)));
        assert_eq!(hit_test(screen(), x, first + 3, 3), None);
    }

    #[test]
    fn test_miss_on_heading() {
        assert_eq!(hit_test(screen(), 40, 1, 1), None);
    }
}
