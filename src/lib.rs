//! Tic-tac-toe with an in-memory move history and time-travel.
//!
//! # Architecture
//!
//! - **Rules**: [`detect_winner`] checks a single [`Board`] against the
//!   eight [`WIN_LINES`].
//! - **BoardState**: one snapshot plus the player to move; derives the
//!   [`Status`] and highlighted cells and turns clicks into successor boards.
//! - **GameController**: owns the history of boards and the step on display;
//!   records plays, truncating any later branch, and jumps between steps.
//! - **Front ends**: a ratatui terminal UI ([`run_tui`]) and headless
//!   [`replay`] of scripted [`Intent`]s.
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameController, Intent};
//!
//! let mut game = GameController::new();
//! for index in [0, 4, 1, 7, 2] {
//!     game.dispatch(Intent::CellClick(index));
//! }
//! assert_eq!(game.view().status(), "winner is X");
//!
//! game.jump_to(2);
//! assert_eq!(game.view().status(), "next player is X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod games;
mod replay;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, LogConfig, Theme, ThemeColor};

// Crate-level exports - Replay
pub use replay::{ReplayError, replay};

// Crate-level exports - Terminal UI
pub use tui::{App, AppAction, Focus, move_cursor, run_tui};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardState, GameController, GameView, Intent, IntentParseError, MoveEntry, Player,
    Position, Square, Status, WIN_LINES, WinLine, WinResult, detect_winner,
};
