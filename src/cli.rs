//! Command-line interface for tictactoe_timeline.

use crate::games::tictactoe::Intent;
use clap::{Parser, Subcommand};

/// Tic-tac-toe with move history and time-travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Tic-tac-toe with move history and time-travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, env = "TICTACTOE_CONFIG", default_value = "tictactoe.toml", global = true)]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply scripted clicks to a new game and print the result
    Replay {
        /// Cells by index (0-8) or label (e.g. "center"), or "@N" to jump to step N
        #[arg(required = true)]
        intents: Vec<Intent>,

        /// Print the display model as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from(["tictactoe_timeline", "replay", "0", "center", "@1", "--json"])
            .unwrap();
        match cli.command {
            Command::Replay { intents, json } => {
                assert!(json);
                assert_eq!(
                    intents,
                    [Intent::CellClick(0), Intent::CellClick(4), Intent::JumpTo(1)]
                );
            }
            Command::Play => panic!("Expected replay"),
        }
    }

    #[test]
    fn test_replay_rejects_bad_intent() {
        assert!(Cli::try_parse_from(["tictactoe_timeline", "replay", "nowhere"]).is_err());
    }

    #[test]
    fn test_command_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
