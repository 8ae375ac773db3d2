//! Terminal UI for playing and time-travelling through a game.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction, Focus};
pub use input::move_cursor;

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Runs the terminal UI until the user quits.
pub fn run_tui(config: &AppConfig) -> Result<()> {
    init_file_tracing(config)?;

    info!("Starting Tic Tac Toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(*config.theme());
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        moves = app.game().history().len() - 1,
        "Terminal UI closed"
    );
    res
}

/// Draw-then-read loop. Each key press is applied in full before the next
/// frame is drawn.
#[instrument(skip_all)]
fn run_app(terminal: &mut CrosstermTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && app.handle_key(key) == AppAction::Quit
        {
            return Ok(());
        }
    }
}

/// Sends tracing output to the configured log file so it cannot corrupt the
/// terminal.
fn init_file_tracing(config: &AppConfig) -> Result<()> {
    let path = config.log().file();
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log().filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}
