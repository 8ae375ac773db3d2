//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](super::Board). Rules are kept apart
//! from board storage so every component can share them.

pub mod win;

pub use win::{WIN_LINES, WinLine, WinResult, detect_winner};
