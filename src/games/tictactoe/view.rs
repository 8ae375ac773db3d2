//! Display model handed to the renderer.

use super::controller::{GameController, MoveEntry};
use super::types::{Board, Square};
use derive_getters::Getters;
use serde::Serialize;

/// Everything a renderer needs for one frame.
///
/// Derived from scratch after every state change and never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameView {
    /// Squares of the board on display, row-major.
    squares: [Square; 9],
    /// Which squares belong to the winning line.
    highlights: [bool; 9],
    /// Status line text.
    status: String,
    /// Move list, one entry per history step.
    moves: Vec<MoveEntry>,
    /// Step of the board on display.
    current_move: usize,
}

impl GameView {
    pub(super) fn derive(game: &GameController) -> Self {
        let state = game.board_state();
        Self {
            squares: *state.board().squares(),
            highlights: state.highlights(),
            status: state.status().to_string(),
            moves: game.moves(),
            current_move: game.current_move(),
        }
    }

    /// The displayed squares as a board.
    pub fn board(&self) -> Board {
        Board::from_squares(self.squares)
    }

    /// Plain-text rendering: board, status, then the move list with the
    /// current entry marked.
    pub fn to_text(&self) -> String {
        let mut out = self.board().display();
        out.push_str("\n\n");
        out.push_str(&self.status);
        out.push('\n');
        for entry in &self.moves {
            let marker = if *entry.step() == self.current_move { '>' } else { ' ' };
            out.push_str(&format!("\n{} {}. {}", marker, entry.step() + 1, entry));
        }
        out
    }
}
