//! Terminal UI for the tic-tac-toe timeline.

mod app;
mod input;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tokio::time::{Duration, sleep};
use tracing::{error, info, instrument};

use crate::AppConfig;
use terminal::TerminalGuard;

pub use app::{App, Focus};
pub use input::{digit_position, move_cursor};
pub use ui::{ScreenLayout, Target, draw, hit_test};

/// Runs the interactive game until the user quits.
pub async fn run_tui(config: AppConfig) -> Result<()> {
    // Log to a file so output does not corrupt the screen.
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting tic-tac-toe TUI");

    let guard = TerminalGuard::enter(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let app = App::new(*config.show_cell_numbers());
    let tick = Duration::from_millis(*config.tick_rate_ms());
    let res = run_app(&mut terminal, app, tick).await;
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

/// Draw, poll, dispatch. All state changes happen in the dispatch step.
#[instrument(skip_all)]
async fn run_app<B>(terminal: &mut Terminal<B>, mut app: App, tick: Duration) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        let area = terminal.draw(|f| ui::draw(f, &app))?.area;

        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse, area),
                _ => {}
            }
        }

        if *app.should_quit() {
            info!("User quit");
            return Ok(());
        }

        sleep(Duration::from_millis(10)).await;
    }
}
