//! Application state and logic.

use crossterm::event::KeyCode;
use tracing::debug;

use crate::game::{GameState, Position};

use super::input;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys move the timeline selection.
    Timeline,
}

/// Main application state.
///
/// A thin shell around [`GameState`]: the only extra state is where the
/// user is pointing. Rejected moves and jumps are deliberately ignored
/// here, so the screen simply does not change.
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected: usize,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
        }
    }

    /// Gets the game state.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the selected timeline entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10) {
                    if (1..=9).contains(&digit) {
                        self.place(digit as usize - 1);
                    }
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.place(self.cursor.to_index()),
                Focus::Timeline => self.jump(self.selected),
            },
            KeyCode::Up | KeyCode::Down if self.focus == Focus::Timeline => {
                self.move_selection(key);
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => Focus::Timeline,
            Focus::Timeline => Focus::Board,
        };
        debug!(focus = ?self.focus, "Focus switched");
    }

    fn place(&mut self, index: usize) {
        // Rejections leave the game untouched and the screen unchanged.
        if let Ok(pos) = self.game.apply_move(index) {
            self.cursor = pos;
            self.selected = self.game.step();
        }
    }

    fn jump(&mut self, step: usize) {
        if self.game.jump_to(step).is_ok() {
            self.selected = step;
        }
    }

    fn move_selection(&mut self, key: KeyCode) {
        let last = self.game.history().len() - 1;
        self.selected = match key {
            KeyCode::Up => self.selected.saturating_sub(1),
            KeyCode::Down => (self.selected + 1).min(last),
            _ => self.selected,
        };
    }

    /// Restarts with a fresh game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game = GameState::new();
        self.cursor = Position::Center;
        self.focus = Focus::Board;
        self.selected = 0;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Player, Square};

    #[test]
    fn test_digit_places_at_cell() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(
            app.game().current_board().get(Position::Center),
            Square::Occupied(Player::X)
        );
        assert_eq!(app.cursor(), Position::Center);
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = App::new();
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.game().current_board().get(Position::Center),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('5'));
        let before = app.game().clone();
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game(), &before);
    }

    #[test]
    fn test_timeline_jump() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus(), Focus::Timeline);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.selected(), 0);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game().step(), 0);
        assert_eq!(app.game().to_move(), Player::X);
    }

    #[test]
    fn test_selection_stays_in_range() {
        let mut app = App::new();
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.selected(), 0);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut app = App::new();
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.game().history().len(), 1);
        assert_eq!(app.focus(), Focus::Board);
        assert_eq!(app.selected(), 0);
        assert_eq!(app.cursor(), Position::Center);
    }
}
