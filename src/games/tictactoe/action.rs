//! User intents for tic-tac-toe.
//!
//! Every interaction reduces to one of two discrete events: a click on a
//! board cell or a click on a history entry. Intents carry only the index,
//! so they can be scripted, logged and replayed.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A click event delivered to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Intent {
    /// Click on the board cell with this index (0-8).
    #[display("{_0}")]
    CellClick(usize),
    /// Click on the history entry for this step.
    #[display("@{_0}")]
    JumpTo(usize),
}

impl FromStr for Intent {
    type Err = IntentParseError;

    /// Parses `@N` as a jump to step `N`, anything else as a cell given by
    /// index or label (`4`, `center`, `top-left`).
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(step) = s.strip_prefix('@') {
            return step
                .parse::<usize>()
                .map(Intent::JumpTo)
                .map_err(|e| IntentParseError::new(format!("Invalid jump '{}': {}", s, e)));
        }

        Position::from_label_or_number(s)
            .map(|pos| Intent::CellClick(pos.to_index()))
            .ok_or_else(|| IntentParseError::new(format!("Unknown cell '{}'", s)))
    }
}

/// Intent parse error.
#[derive(Debug, Clone, Display, Error)]
#[display("Intent error: {} at {}:{}", message, file, line)]
pub struct IntentParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl IntentParseError {
    /// Creates a new intent parse error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell_by_index_and_label() {
        assert_eq!("4".parse::<Intent>().unwrap(), Intent::CellClick(4));
        assert_eq!("top-right".parse::<Intent>().unwrap(), Intent::CellClick(2));
    }

    #[test]
    fn test_parse_jump() {
        assert_eq!("@0".parse::<Intent>().unwrap(), Intent::JumpTo(0));
        assert_eq!(" @12 ".parse::<Intent>().unwrap(), Intent::JumpTo(12));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("9".parse::<Intent>().is_err());
        assert!("@x".parse::<Intent>().is_err());
        let err = "middle".parse::<Intent>().unwrap_err();
        assert!(err.message.contains("middle"));
    }

    #[test]
    fn test_display_matches_parse_syntax() {
        for intent in [Intent::CellClick(7), Intent::JumpTo(3)] {
            assert_eq!(intent.to_string().parse::<Intent>().unwrap(), intent);
        }
    }
}
