//! Raw-mode terminal setup with restore on drop.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, instrument};

/// Puts the terminal into raw mode on the alternate screen with mouse
/// capture. Dropping the guard undoes all of it, so every exit path,
/// including a failed setup, leaves the terminal usable.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Enters raw mode, the alternate screen and mouse capture on `out`.
    #[instrument(skip_all)]
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        // Built before the remaining setup so a failure below still restores.
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;
        debug!("Terminal entered raw mode");
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let _ = disable_raw_mode();
        let _ = execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, Show);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_restores_screen_and_cursor() {
        let mut out = Vec::new();
        drop(TerminalGuard { out: &mut out });

        let written = String::from_utf8_lossy(&out);
        assert!(written.contains("\x1b[?1049l"), "alternate screen left: {written:?}");
        assert!(written.contains("\x1b[?25h"), "cursor shown: {written:?}");
    }
}
