//! Terminal to-do list. Set `RUST_LOG` for logs; they are printed to stderr
//! after the window closes, or as they happen when stderr is redirected.
mod command_widget;
mod commands;
mod config;
mod error;
mod logging;
mod shell;
mod store;
mod types;
mod views;
use crate::error::Result;
use crate::views::home::{render_home, AppState};
use crate::{config::Config, shell::Shell, store::User};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use log::{debug, info, warn};
use ratatui::prelude::{Backend, CrosstermBackend, Terminal};
use std::io::{self, stderr, stdout, Write};

/// Holds the terminal in raw mode on the alternate screen with mouse
/// capture. Dropping it undoes all of that, whether setup finished or not,
/// including during a panic.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W) -> io::Result<Self> {
        let mut guard = TerminalGuard { out };
        guard
            .out
            .execute(EnterAlternateScreen)?
            .execute(EnableMouseCapture)?;
        enable_raw_mode()?;
        Ok(guard)
    }

    /// Attempts every step even if an earlier one fails.
    fn restore(&mut self) -> io::Result<()> {
        let screen = self
            .out
            .execute(DisableMouseCapture)
            .and_then(|out| out.execute(LeaveAlternateScreen))
            .and_then(|out| out.execute(Show))
            .map(drop);
        disable_raw_mode().and(screen)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!("Failed to restore terminal: {e}");
        }
    }
}

fn run<B: Backend>(terminal: &mut Terminal<B>, shell: &mut Shell, config: &Config) -> Result<()> {
    let mut next = AppState::Home;
    loop {
        match next {
            AppState::Home => next = render_home(terminal, shell, config)?,
            AppState::Exit => break,
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let logs = logging::init();
    let config = Config::default();
    debug!("Starting with {config:?}");
    let mut shell = Shell::new(User::new(config.user_name.clone()));

    let result = {
        let _guard = TerminalGuard::enter(stdout())?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
        run(&mut terminal, &mut shell, &config)
    };

    info!(
        "Exiting with {} tasks, {} completed",
        shell.user().len(),
        shell.user().completed_count()
    );
    if let Some(logs) = logs {
        logs.drain_into(&mut stderr())?;
    }
    result
}
