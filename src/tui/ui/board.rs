//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::games::tictactoe::{Player, Position, Square, Timeline};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Width of the 3x3 grid including separators.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Height of the 3x3 grid including separators.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Rectangles of the 9 squares inside `area`, in board order.
pub fn cell_rects(area: Rect) -> [Rect; 9] {
    let area = grid_area(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(grid_constraints(CELL_HEIGHT))
        .split(area);

    let mut rects = [Rect::default(); 9];
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(grid_constraints(CELL_WIDTH))
            .split(row_area);
        for (col, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            rects[row * 3 + col] = cell;
        }
    }
    rects
}

/// Renders the viewed snapshot of `timeline`.
///
/// Squares on the highlighted winning line get a green background;
/// `cursor`, when given, is drawn reversed.
pub fn render_board(
    f: &mut Frame,
    area: Rect,
    timeline: &Timeline,
    cursor: Option<Position>,
    show_cell_numbers: bool,
) {
    let board = timeline.current_board();
    let area = grid_area(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(grid_constraints(CELL_HEIGHT))
        .split(area);
    render_separator(f, rows[1]);
    render_separator(f, rows[3]);

    for row_area in [rows[0], rows[2], rows[4]] {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(grid_constraints(CELL_WIDTH))
            .split(row_area);
        render_vertical_sep(f, cols[1]);
        render_vertical_sep(f, cols[3]);
    }

    for (rect, pos) in cell_rects(area).into_iter().zip(Position::ALL) {
        let (text, mut style) = match board.get(pos) {
            Square::Empty if show_cell_numbers => (
                (pos.to_index() + 1).to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Square::Empty => (String::new(), Style::default()),
            Square::Occupied(Player::X) => (
                "X".to_string(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Square::Occupied(Player::O) => (
                "O".to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };
        if timeline.is_highlighted(pos) {
            style = style.bg(Color::Green).fg(Color::Black);
        }
        if cursor == Some(pos) {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let paragraph = Paragraph::new(vec![Line::default(), Line::from(text)])
            .style(style)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, rect);
    }
}

/// Top-left part of `area` sized to the grid, so extra space stays blank.
fn grid_area(area: Rect) -> Rect {
    Rect {
        width: area.width.min(BOARD_WIDTH),
        height: area.height.min(BOARD_HEIGHT),
        ..area
    }
}

fn grid_constraints(cell: u16) -> [Constraint; 5] {
    [
        Constraint::Length(cell),
        Constraint::Length(1),
        Constraint::Length(cell),
        Constraint::Length(1),
        Constraint::Length(cell),
    ]
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}
