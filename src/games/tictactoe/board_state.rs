//! One board snapshot as the player sees it.

use super::position::Position;
use super::rules::{WinResult, detect_winner};
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A line is complete.
    #[display("winner is {_0}")]
    Winner(Player),
    /// Play continues with this player.
    #[display("next player is {_0}")]
    NextPlayer(Player),
}

/// A board snapshot paired with the player to move.
///
/// Status and highlights are recomputed on demand. A click never changes
/// the snapshot; it yields the successor board for the owner to record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardState {
    board: Board,
    to_move: Player,
}

impl BoardState {
    /// Wraps `board` with `to_move` as the player whose mark comes next.
    pub fn new(board: Board, to_move: Player) -> Self {
        Self { board, to_move }
    }

    /// The snapshot being shown.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose mark a click would place.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The completed line, if any.
    pub fn winner(&self) -> Option<WinResult> {
        detect_winner(&self.board)
    }

    /// Handles a click on the cell at `index`.
    ///
    /// Returns the next board, or `None` when the click is ignored: the game
    /// already has a winner, the cell is taken, or `index` is not a cell.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn on_cell_click(&self, index: usize) -> Option<Board> {
        let Some(pos) = Position::from_index(index) else {
            debug!("Click outside the board ignored");
            return None;
        };
        if self.winner().is_some() {
            debug!("Click after a win ignored");
            return None;
        }
        if !self.board.is_empty(pos) {
            debug!(position = %pos, "Click on occupied square ignored");
            return None;
        }
        Some(self.board.with_mark(pos, self.to_move))
    }

    /// Derives the status line.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(result) => Status::Winner(result.winner()),
            None => Status::NextPlayer(self.to_move),
        }
    }

    /// Checks whether `pos` belongs to the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.winner().is_some_and(|result| result.line().contains(pos))
    }

    /// Highlight flags for all nine cells, in index order.
    pub fn highlights(&self) -> [bool; 9] {
        let line = self.winner().map(|result| result.line());
        Position::ALL.map(|pos| line.is_some_and(|line| line.contains(pos)))
    }
}
