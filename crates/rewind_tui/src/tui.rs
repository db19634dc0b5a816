//! Terminal setup and the interactive event loop.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tracing::{debug, error, info, instrument, warn};

use crate::app::App;
use crate::ui;

/// Holds the terminal in raw mode on the alternate screen. Restores it on drop.
struct TerminalGuard;

impl TerminalGuard {
    /// Enables raw mode, then enters the alternate screen with mouse capture.
    ///
    /// A failure after raw mode is on drops the guard, which undoes it.
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");

        if let Err(err) = disable_raw_mode() {
            warn!(error = %err, "Failed to disable raw mode");
        }
        if let Err(err) = restore_terminal(&mut io::stdout()) {
            warn!(error = %err, "Failed to leave alternate screen");
        }
    }
}

/// Leaves the alternate screen, stops mouse capture and shows the cursor.
fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, cursor::Show)
}

/// Takes over the terminal and plays until the user quits.
///
/// The terminal is restored on every exit path.
#[instrument(skip(app))]
pub fn run_tui(mut app: App) -> Result<()> {
    info!("Starting Rewind TUI");

    let guard = TerminalGuard::enter()?;
    let res = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| run_app(&mut terminal, &mut app));
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Redraws, then blocks for the next event, until the app quits.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    while !app.should_quit() {
        let mut layout = None;
        terminal.draw(|f| layout = Some(ui::draw(f, app)))?;
        if let Some(layout) = layout {
            app.set_layout(layout);
        }

        let event = event::read()?;
        app.handle_event(&event);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_leaves_alternate_screen_and_shows_cursor() {
        let mut out = Vec::new();
        restore_terminal(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"), "{written:?}");
        assert!(written.contains("\x1b[?25h"), "{written:?}");
        assert!(written.contains("\x1b[?1000l"), "{written:?}");
    }
}
