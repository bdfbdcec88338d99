use crate::game::{Action, GameResult, GameState, TurnEvent, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::debug;

use super::Presentation;

pub struct App {
    game_state: GameState,
    presentation: Presentation,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(presentation: Presentation) -> Self {
        App {
            game_state: GameState::initial(),
            presentation,
            selected_column: 3, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop. Returns how the last game ended; leaving
    /// before a result counts as aborted.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<GameResult> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(self.game_state.result().unwrap_or(GameResult::Aborted))
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        let action = match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
                return;
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
                return;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.game_state.reset();
                self.selected_column = 3;
                self.message = Some("New game started!".to_string());
                return;
            }
            KeyCode::Enter | KeyCode::Char(' ') => Action::Play(self.selected_column as i64 + 1),
            KeyCode::Char(c) => match c.to_digit(10) {
                Some(digit) => {
                    if (1..=COLS as u32).contains(&digit) {
                        self.selected_column = digit as usize - 1;
                    }
                    Action::Play(i64::from(digit))
                }
                None => Action::Unrecognized,
            },
            _ => return,
        };

        self.apply(action);
    }

    /// Feed an action to the game and turn the outcome into a message
    fn apply(&mut self, action: Action) {
        let event = self.game_state.handle(action);
        debug!(?action, ?event, "tui input");

        match event {
            TurnEvent::Placed { status, .. } if status.is_terminal() => {
                if let Some(result) = self.game_state.result() {
                    self.message = self.presentation.announcement(result);
                }
            }
            TurnEvent::Placed { .. } => {}
            TurnEvent::Illegal(reason) => {
                self.message = Some(format!("You cannot play at this location: {reason}."));
            }
            TurnEvent::Unrecognized => {
                self.message = Some("You cannot play at this location.".to_string());
            }
            TurnEvent::Aborted => self.should_quit = true,
            TurnEvent::GameOver => {
                if action == Action::Quit {
                    self.should_quit = true;
                } else {
                    self.message = Some("Game over! Press 'r' to restart.".to_string());
                }
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            &self.presentation,
            self.selected_column,
            &self.message,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Presentation::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Phase, Player};
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_digit_keys_play_columns() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('7'));

        assert_eq!(app.game_state.moves_played(), 2);
        assert_eq!(app.game_state.current_player(), Player::One);
        assert_eq!(app.selected_column, 6);
    }

    #[test]
    fn test_selector_and_enter() {
        let mut app = App::default();
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.game_state.board().cell_at(crate::game::Position::new(1, 5)).owner(),
            Some(Player::One)
        );

        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, COLS - 1);
    }

    #[test]
    fn test_illegal_digit_keeps_turn() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('9'));

        assert_eq!(*app.game_state.board(), Board::new());
        assert_eq!(app.game_state.current_player(), Player::One);
        assert!(app.message.as_deref().unwrap_or("").starts_with("You cannot play"));
        assert_eq!(app.selected_column, 3);
    }

    #[test]
    fn test_unrecognized_key_keeps_turn() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('z'));
        assert_eq!(app.game_state.moves_played(), 0);
        assert_eq!(
            app.message.as_deref(),
            Some("You cannot play at this location.")
        );
    }

    #[test]
    fn test_quit_aborts() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
        assert_eq!(app.game_state.phase(), Phase::Aborted);
    }

    #[test]
    fn test_win_message_and_restart() {
        let mut app = App::default();
        for key in ['4', '1', '4', '1', '4', '1', '4'] {
            press(&mut app, KeyCode::Char(key));
        }
        assert_eq!(app.game_state.result(), Some(GameResult::Win(Player::One)));
        assert_eq!(app.message.as_deref(), Some("Player 1 wins!"));

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(
            app.message.as_deref(),
            Some("Game over! Press 'r' to restart.")
        );

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.game_state, GameState::initial());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_after_game_over_exits() {
        let mut app = App::default();
        for key in ['4', '1', '4', '1', '4', '1', '4'] {
            press(&mut app, KeyCode::Char(key));
        }
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
        assert_eq!(app.game_state.result(), Some(GameResult::Win(Player::One)));
    }
}
