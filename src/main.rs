//! Tic-tac-toe with move history and time-travel.
//!
//! `play` opens the terminal UI; `replay` applies scripted clicks headlessly.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictactoe_timeline::{AppConfig, Cli, Command, GameController, Intent, replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play => run_tui(&config),
        Command::Replay { intents, json } => run_replay(&config, &intents, json),
    }
}

/// Replays intents and prints the final view to stdout.
fn run_replay(config: &AppConfig, intents: &[Intent], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log().filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(count = intents.len(), json, "Replaying intents");
    let game: GameController = replay(intents)?;
    let view = game.view();

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", view.to_text());
    }
    Ok(())
}
