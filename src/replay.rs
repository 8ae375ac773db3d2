//! Headless playback of scripted intents.

use crate::games::tictactoe::{GameController, Intent};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

/// Plays `intents` against a fresh game and returns the final state.
///
/// Jumps are checked against the history length before they reach the
/// controller; a script naming a step that does not exist is rejected.
/// Ignored clicks are not errors and leave the game unchanged.
#[instrument(skip(intents), fields(count = intents.len()))]
pub fn replay(intents: &[Intent]) -> Result<GameController, ReplayError> {
    let mut game = GameController::new();
    for (i, &intent) in intents.iter().enumerate() {
        if let Intent::JumpTo(step) = intent
            && step >= game.history().len()
        {
            return Err(ReplayError::new(format!(
                "Intent #{} jumps to step {} but history has {} entries",
                i + 1,
                step,
                game.history().len()
            )));
        }
        let changed = game.dispatch(intent);
        debug!(%intent, changed, "Intent applied");
    }
    info!(
        history_len = game.history().len(),
        current_move = game.current_move(),
        "Replay finished"
    );
    Ok(game)
}

/// Replay error.
#[derive(Debug, Clone, Display, Error)]
#[display("Replay error: {} at {}:{}", message, file, line)]
pub struct ReplayError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ReplayError {
    /// Creates a new replay error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
