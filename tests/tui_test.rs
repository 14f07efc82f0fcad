//! Tests for the terminal front end: rendering and input mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, layout::Rect, style::Color};
use std::collections::BTreeSet;
use tictactoe_timeline::{App, GameStatus, Player, Position, ScreenLayout, Target, draw, hit_test};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 24;

fn screen() -> Rect {
    Rect::new(0, 0, WIDTH, HEIGHT)
}

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("test terminal");
    terminal.draw(|f| draw(f, app)).expect("draw");
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

/// Board squares that have at least one green-background screen cell.
fn green_squares(app: &App) -> BTreeSet<usize> {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("test terminal");
    terminal.draw(|f| draw(f, app)).expect("draw");
    let mut squares = BTreeSet::new();
    for (i, cell) in terminal.backend().buffer().content().iter().enumerate() {
        if cell.bg != Color::Green {
            continue;
        }
        let (column, row) = ((i % WIDTH as usize) as u16, (i / WIDTH as usize) as u16);
        match hit_test(screen(), column, row, app.timeline().len()) {
            Some(Target::Cell(pos)) => {
                squares.insert(pos.to_index());
            }
            other => panic!("green cell at ({column}, {row}) outside the board: {other:?}"),
        }
    }
    squares
}

fn type_digits(app: &mut App, digits: &str) {
    for c in digits.chars() {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
}

fn click(app: &mut App, column: u16, row: u16) {
    let mouse = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    };
    app.handle_mouse(mouse, screen());
}

fn click_target(app: &mut App, target: Target) {
    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            if hit_test(screen(), column, row, app.timeline().len()) == Some(target) {
                click(app, column, row);
                return;
            }
        }
    }
    panic!("no screen cell maps to {:?}", target);
}

#[test]
fn test_initial_screen() {
    let app = App::default();
    let text = render(&app);
    assert!(text.contains("Tic Tac Toe"));
    assert!(text.contains("Reset"));
    assert!(text.contains("Go to game start"));
    assert!(!text.contains("Revert to Turn"));
    assert!(!text.contains("winner"));
    assert!(!text.contains("Draw!"));
}

#[test]
fn test_history_entries_rendered() {
    let mut app = App::default();
    type_digits(&mut app, "159");
    let text = render(&app);
    assert!(text.contains("Revert to Turn 1"));
    assert!(text.contains("Revert to Turn 3"));
    assert!(!text.contains("Revert to Turn 4"));
}

#[test]
fn test_winner_status_rendered() {
    let mut app = App::default();
    type_digits(&mut app, "15243");
    assert!(render(&app).contains("X is the winner!"));
}

#[test]
fn test_draw_status_rendered() {
    let mut app = App::default();
    type_digits(&mut app, "123547869");
    assert_eq!(app.timeline().status(), GameStatus::Draw);
    assert!(render(&app).contains("Draw!"));
}

#[test]
fn test_mouse_plays_a_game() {
    let mut app = App::default();
    for idx in [0, 4, 1, 3, 2] {
        click_target(&mut app, Target::Cell(Position::ALL[idx]));
    }
    assert_eq!(app.timeline().status(), GameStatus::Won(Player::X));
    assert!(app.timeline().is_highlighted(Position::TopRight));
}

#[test]
fn test_mouse_jump_and_reset() {
    let mut app = App::default();
    type_digits(&mut app, "1593");

    click_target(&mut app, Target::HistoryEntry(2));
    assert_eq!(app.timeline().current_move(), 2);
    assert_eq!(app.timeline().len(), 5);

    click_target(&mut app, Target::Reset);
    assert_eq!(app.timeline().len(), 1);
    assert_eq!(app.timeline().current_move(), 0);
}

#[test]
fn test_right_click_is_ignored() {
    let mut app = App::default();
    let layout = ScreenLayout::new(screen());
    let mouse = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        column: layout.reset.x + 1,
        row: layout.reset.y + 1,
        modifiers: KeyModifiers::NONE,
    };
    type_digits(&mut app, "5");
    app.handle_mouse(mouse, screen());
    assert_eq!(app.timeline().current_move(), 1);
}

#[test]
fn test_winning_line_rendered_green() {
    let mut app = App::default();
    assert!(green_squares(&app).is_empty());

    type_digits(&mut app, "15243");
    assert_eq!(green_squares(&app), BTreeSet::from([0, 1, 2]));
}

#[test]
fn test_jump_back_to_won_position_drops_green() {
    let mut app = App::default();
    type_digits(&mut app, "15243");
    app.handle_key(KeyEvent::new(KeyCode::Char('['), KeyModifiers::NONE));
    app.handle_key(KeyEvent::new(KeyCode::Char(']'), KeyModifiers::NONE));

    assert_eq!(app.timeline().current_move(), 5);
    assert!(green_squares(&app).is_empty());
    assert!(render(&app).contains("X is the winner!"));
}
