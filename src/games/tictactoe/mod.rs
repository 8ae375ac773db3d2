//! Tic-tac-toe with an in-memory move history and time-travel.
//!
//! The pieces nest leaves first: [`rules::detect_winner`] inspects a single
//! [`Board`], a [`BoardState`] interprets clicks against one snapshot, and the
//! [`GameController`] owns the history and decides which snapshot is shown.

mod action;
mod board_state;
mod controller;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{Intent, IntentParseError};
pub use board_state::{BoardState, Status};
pub use controller::{GameController, MoveEntry};
pub use position::Position;
pub use rules::{WIN_LINES, WinLine, WinResult, detect_winner};
pub use types::{Board, Player, Square};
pub use view::GameView;
