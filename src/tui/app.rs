//! Application state and key handling.

use crate::config::Theme;
use crate::games::tictactoe::{GameController, Intent, Position};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info, instrument};

use super::input::move_cursor;

/// Pane receiving key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Redraw and wait for the next key.
    Continue,
    /// Leave the terminal UI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameController,
    theme: Theme,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(theme: Theme) -> Self {
        Self {
            game: GameController::new(),
            theme,
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step: 0,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Colours used by the renderer.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Board cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Pane receiving key presses.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Move-list entry under the selection.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Handles one key event.
    #[instrument(skip(self, key), fields(code = ?key.code, focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        // crossterm reports releases too on some platforms
        if key.kind == KeyEventKind::Release {
            return AppAction::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return AppAction::Quit;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                info!("User interrupted");
                return AppAction::Quit;
            }
            KeyCode::Tab | KeyCode::BackTab => self.toggle_focus(),
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
        AppAction::Continue
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.selected_step = self.game.current_move();
                Focus::History
            }
            Focus::History => Focus::Board,
        };
        debug!(focus = ?self.focus, "Focus changed");
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.apply(Intent::CellClick(self.cursor.to_index()));
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.apply(Intent::CellClick(index));
            }
            _ => {}
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let last = self.game.history().len() - 1;
        match code {
            KeyCode::Up => self.selected_step = self.selected_step.saturating_sub(1),
            KeyCode::Down => self.selected_step = (self.selected_step + 1).min(last),
            KeyCode::Home => self.selected_step = 0,
            KeyCode::End => self.selected_step = last,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.apply(Intent::JumpTo(self.selected_step));
            }
            _ => {}
        }
    }

    /// Sends an intent to the game and keeps the selection on the board
    /// being shown.
    fn apply(&mut self, intent: Intent) {
        if self.game.dispatch(intent) {
            debug!(%intent, current_move = self.game.current_move(), "Game updated");
        }
        self.selected_step = self.game.current_move();
    }
}
