use crate::error::GameError;
use crate::game::{GameState, Outcome};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;
use tracing::debug;

/// The board presenter: turns key presses and clicks into column choices,
/// feeds them to the round's [`GameState`], and shows the result.
pub struct App {
    game_state: GameState,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    board_area: Rect,
}

impl App {
    pub fn new(game_state: GameState) -> Self {
        let selected_column = game_state.width() / 2; // Start in middle
        App {
            game_state,
            selected_column,
            should_quit: false,
            message: None,
            board_area: Rect::default(),
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and mouse events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.selected_column + 1 < self.game_state.width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                self.drop_piece(column);
            }
            KeyCode::Char('r') | KeyCode::Char('n') => {
                self.new_round();
            }
            _ => {}
        }
    }

    /// A left click on a board column drops a piece there
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if mouse.row < self.board_area.y || mouse.row >= self.board_area.bottom() {
            return;
        }
        if let Some(column) =
            super::game_view::column_at(self.board_area, self.game_state.width(), mouse.column)
        {
            self.message = None;
            self.drop_piece(column);
        }
    }

    fn new_round(&mut self) {
        self.game_state.reset();
        self.selected_column = self.game_state.width() / 2;
        self.message = Some("New game started!".to_string());
    }

    /// Drop a piece for the current player and report the outcome
    fn drop_piece(&mut self, column: usize) {
        match self.game_state.drop_piece(column) {
            Ok(result) => {
                self.selected_column = column;
                self.message = match result.outcome {
                    Outcome::Continue => None,
                    Outcome::Win(player) => Some(format!("{} won!", player.name())),
                    Outcome::Tie => Some("Tie!".to_string()),
                };
            }
            Err(err) => {
                debug!(%err, "presenter drop rejected");
                self.message = Some(match err {
                    GameError::ColumnFull(_) => "Column is full!".to_string(),
                    GameError::InvalidColumn { .. } => "Invalid column!".to_string(),
                    GameError::GameAlreadyOver => {
                        "Game over! Press 'r' to play again.".to_string()
                    }
                    // Only raised when building a board, never by a drop
                    GameError::InvalidDimensions { .. } => err.to_string(),
                });
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut ratatui::Frame) {
        self.board_area = super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(GameState::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameStatus, Player};
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_starts_in_middle_column() {
        let app = App::default();
        assert_eq!(app.selected_column, 3);
        assert_eq!(app.game_state().move_count(), 0);
    }

    #[test]
    fn test_cursor_stays_on_board() {
        let mut app = App::new(GameState::new(4, 4).unwrap());
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, 3);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
    }

    #[test]
    fn test_digit_keys_play_a_win() {
        let mut app = App::default();
        for key in ['1', '1', '2', '2', '3', '3', '4'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.game_state().status(), GameStatus::Won(Player::One));
        assert_eq!(app.message(), Some("Player 1 won!"));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Game over! Press 'r' to play again."));
    }

    #[test]
    fn test_full_column_reprompts_same_player() {
        let mut app = App::new(GameState::new(4, 5).unwrap());
        for _ in 0..4 {
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.game_state().current_player(), Player::One);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message(), Some("Column is full!"));
        assert_eq!(app.game_state().current_player(), Player::One);
        assert_eq!(app.game_state().move_count(), 4);
    }

    #[test]
    fn test_digit_past_last_column_is_invalid() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.message(), Some("Invalid column!"));
        assert_eq!(app.game_state().move_count(), 0);
    }

    #[test]
    fn test_new_round_resets_game() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game_state(), &GameState::standard());
        assert_eq!(app.message(), Some("New game started!"));

        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.game_state(), &GameState::standard());
        assert_eq!(app.selected_column, 3);
        assert_eq!(app.message(), Some("New game started!"));
    }

    #[test]
    fn test_click_drops_in_column() {
        let mut app = App::default();
        app.board_area = Rect::new(0, 3, 40, 10);
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 13,
            row: 6,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.game_state().move_count(), 1);
        assert_eq!(app.selected_column, 1);

        // Clicks outside the board rows are ignored
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 13,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.game_state().move_count(), 1);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
