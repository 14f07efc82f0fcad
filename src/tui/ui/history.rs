//! Move history list.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::games::tictactoe::Timeline;

/// Renders one entry per recorded snapshot inside `block`.
///
/// The viewed entry is marked with an arrow; `selected`, when given, is
/// drawn reversed.
pub fn render_history(
    f: &mut Frame,
    area: Rect,
    block: Block<'_>,
    timeline: &Timeline,
    selected: Option<usize>,
) {
    let lines: Vec<Line> = (0..timeline.len())
        .map(|index| {
            let viewed = index == timeline.current_move();
            let marker = if viewed { "▶ " } else { "  " };
            let mut style = if viewed {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if selected == Some(index) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(vec![
                Span::raw(marker),
                Span::styled(Timeline::history_label(index), style),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// History entry index under a screen coordinate, if any.
pub fn entry_at(area: Rect, column: u16, row: u16, len: usize) -> Option<usize> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    if !inner.contains(ratatui::layout::Position::new(column, row)) {
        return None;
    }
    let index = usize::from(row - inner.y);
    (index < len).then_some(index)
}
