//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions that win when held by one player.
///
/// Only the eight entries of [`WIN_LINES`] exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([Position; 3]);

impl WinLine {
    const fn new(a: Position, b: Position, c: Position) -> Self {
        Self([a, b, c])
    }

    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Checks whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Every winning line, in detection order: rows top to bottom, columns left
/// to right, then the two diagonals.
pub const WIN_LINES: [WinLine; 8] = {
    use Position::*;
    [
        // Rows
        WinLine::new(TopLeft, TopCenter, TopRight),
        WinLine::new(MiddleLeft, Center, MiddleRight),
        WinLine::new(BottomLeft, BottomCenter, BottomRight),
        // Columns
        WinLine::new(TopLeft, MiddleLeft, BottomLeft),
        WinLine::new(TopCenter, Center, BottomCenter),
        WinLine::new(TopRight, MiddleRight, BottomRight),
        // Diagonals
        WinLine::new(TopLeft, Center, BottomRight),
        WinLine::new(TopRight, Center, BottomLeft),
    ]
};

/// The winning player together with the line that won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    winner: Player,
    line: WinLine,
}

impl WinResult {
    /// The player holding the line.
    pub fn winner(&self) -> Player {
        self.winner
    }

    /// The line that won.
    pub fn line(&self) -> WinLine {
        self.line
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first line of [`WIN_LINES`] held entirely by one player. A
/// board that completes several lines at once reports the earliest of them,
/// whether or not it could arise in play.
#[instrument]
pub fn detect_winner(board: &Board) -> Option<WinResult> {
    WIN_LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            first @ Square::Occupied(winner) if board.get(b) == first && board.get(c) == first => {
                Some(WinResult { winner, line })
            }
            _ => None,
        }
    })
}
