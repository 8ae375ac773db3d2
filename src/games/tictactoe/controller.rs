//! Game controller owning the move history.

use super::action::Intent;
use super::board_state::BoardState;
use super::types::{Board, Player};
use super::view::GameView;
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// One entry of the move list, pointing at a history step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    step: usize,
    /// Label for the entry.
    description: String,
}

impl MoveEntry {
    /// Creates the entry for history step `step`.
    pub fn new(step: usize) -> Self {
        let description = if step > 0 {
            format!("go to move #{}", step)
        } else {
            "go to game start".to_string()
        };
        Self { step, description }
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description)
    }
}

/// Owns every board reached along the active line of play.
///
/// `history[k]` is the board after `k` moves and `history[0]` is always the
/// empty board. `current_move` selects the snapshot on display and, through
/// its parity, the player to move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameController {
    history: Vec<Board>,
    current_move: usize,
}

impl GameController {
    /// Starts a game with a single empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// All recorded boards, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the board on display.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The board on display.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Whether X moves next.
    pub fn x_is_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// The player to move at the current position.
    pub fn to_move(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// The current snapshot wrapped for click handling and display.
    pub fn board_state(&self) -> BoardState {
        BoardState::new(*self.current_board(), self.to_move())
    }

    /// Records `next_board` as the move after the current position.
    ///
    /// Boards after the current position are dropped first, so playing from
    /// an earlier step starts a new branch. The board is trusted as given.
    #[instrument(skip(self, next_board), fields(from = self.current_move))]
    pub fn play(&mut self, next_board: Board) {
        let mut next_history = self.history[..=self.current_move].to_vec();
        let discarded = self.history.len() - next_history.len();
        if discarded > 0 {
            debug!(discarded, "Discarding moves after branch point");
        }
        next_history.push(next_board);

        self.current_move = next_history.len() - 1;
        self.history = next_history;
        info!(move_number = self.current_move, "Move recorded");
    }

    /// Shows the board after `step` moves without touching the history.
    ///
    /// `step` must come from this game's own move list. Any other index is a
    /// caller bug: it trips an assertion in debug builds and is otherwise
    /// ignored.
    #[instrument(skip(self), fields(from = self.current_move))]
    pub fn jump_to(&mut self, step: usize) {
        debug_assert!(
            step < self.history.len(),
            "jump to step {} outside history of {}",
            step,
            self.history.len()
        );
        if step >= self.history.len() {
            warn!(len = self.history.len(), "Jump outside history ignored");
            return;
        }
        self.current_move = step;
        debug!("Jumped");
    }

    /// Forwards a cell click to the current board and records the result.
    ///
    /// Returns `false` when the board ignored the click.
    #[instrument(skip(self))]
    pub fn click(&mut self, index: usize) -> bool {
        match self.board_state().on_cell_click(index) {
            Some(next_board) => {
                self.play(next_board);
                true
            }
            None => false,
        }
    }

    /// Applies one intent. Returns whether the displayed state changed.
    #[instrument(skip(self, intent), fields(intent = %intent))]
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::CellClick(index) => self.click(index),
            Intent::JumpTo(step) => {
                let before = self.current_move;
                self.jump_to(step);
                before != self.current_move
            }
        }
    }

    /// One move-list entry per history step.
    pub fn moves(&self) -> Vec<MoveEntry> {
        (0..self.history.len()).map(MoveEntry::new).collect()
    }

    /// Derives the complete display model.
    pub fn view(&self) -> GameView {
        GameView::derive(self)
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Position, Square};

    #[test]
    fn test_new_game_has_single_empty_board() {
        let game = GameController::new();
        assert_eq!(game.history(), &[Board::new()]);
        assert_eq!(game.current_move(), 0);
        assert!(game.x_is_next());
    }

    #[test]
    fn test_click_appends_and_advances() {
        let mut game = GameController::new();
        assert!(game.click(4));
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.current_move(), 1);
        assert_eq!(game.current_board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_ignored_click_changes_nothing() {
        let mut game = GameController::new();
        game.click(4);
        let before = game.clone();
        assert!(!game.click(4));
        assert_eq!(game, before);
    }

    #[test]
    fn test_play_trusts_given_board() {
        let mut game = GameController::new();
        let odd = Board::new().with_mark(Position::Center, Player::O);
        game.play(odd);
        assert_eq!(game.current_board(), &odd);
    }

    #[test]
    fn test_jump_keeps_history() {
        let mut game = GameController::new();
        game.click(0);
        game.click(1);
        game.jump_to(0);
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.current_board(), &Board::new());
        assert!(game.x_is_next());
    }

    #[test]
    fn test_dispatch_reports_change() {
        let mut game = GameController::new();
        assert!(game.dispatch(Intent::CellClick(0)));
        assert!(!game.dispatch(Intent::CellClick(0)));
        assert!(!game.dispatch(Intent::JumpTo(1)));
        assert!(game.dispatch(Intent::JumpTo(0)));
    }

    #[test]
    fn test_move_descriptions() {
        let mut game = GameController::new();
        game.click(0);
        game.click(4);
        let labels: Vec<String> = game.moves().iter().map(|m| m.to_string()).collect();
        assert_eq!(labels, ["go to game start", "go to move #1", "go to move #2"]);
        assert_eq!(*game.moves()[2].step(), 2);
    }
}
