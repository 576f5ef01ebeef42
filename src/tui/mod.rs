//! Terminal UI: the interactive presentation layer.
//!
//! The event loop is synchronous. Each key is handled to completion
//! against the session before the next one is read.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction, Focus};

use crate::config::Settings;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error, info, instrument};

/// Restores the terminal when dropped, including while unwinding.
struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    /// Enters raw mode and the alternate screen.
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self { restore: restore_terminal };
        execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = (self.restore)() {
            error!(error = %e, "Failed to restore terminal");
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

/// Runs the interactive game until the user quits.
#[instrument(skip(settings))]
pub fn run(settings: &Settings) -> Result<()> {
    info!(order = %settings.order(), "Starting terminal UI");

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(settings.order());
    let res = event_loop(&mut terminal, &mut app);

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!(steps = app.session().history().len() - 1, "Terminal UI closed");
    res
}

fn event_loop<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == AppAction::Quit
        {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static RESTORED: AtomicUsize = AtomicUsize::new(0);

    fn record_restore() -> io::Result<()> {
        RESTORED.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    #[test]
    fn test_guard_restores_when_loop_panics() {
        let result = std::panic::catch_unwind(|| {
            let _guard = TerminalGuard {
                restore: record_restore,
            };
            panic!("event loop failed");
        });
        assert!(result.is_err());
        assert_eq!(RESTORED.load(Ordering::SeqCst), 1);
    }
}
