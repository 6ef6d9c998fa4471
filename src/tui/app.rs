//! Application state and key handling.

use super::input::{home, move_cursor};
use crossterm::event::KeyCode;
use cube_tictactoe::{ComputerMove, ComputerTurn, Coord, GameSession, SessionConfig};
use tracing::{debug, info};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
pub struct App {
    session: GameSession,
    cursor: Coord,
    message: Option<String>,
    computer_pending: bool,
}

impl App {
    /// Creates the application and starts the first game.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            session: GameSession::new(config),
            cursor: home(),
            message: None,
            computer_pending: false,
        }
    }

    /// Current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// True while a scheduled computer move has not come back.
    pub fn computer_pending(&self) -> bool {
        self.computer_pending
    }

    /// Status line shown under the board.
    pub fn status(&self) -> String {
        let status = self.session.status_text();
        match (&self.message, self.computer_pending()) {
            (Some(message), _) => format!("{} | {}", status, message),
            (None, true) => format!("{} | Computer is thinking...", status),
            (None, false) => status,
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return AppAction::Quit;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play_cursor(),
            other => self.cursor = move_cursor(self.cursor, other),
        }
        AppAction::Continue
    }

    /// Takes the computer's next turn, once per turn.
    ///
    /// Returns `None` when the computer is not to move or its move is
    /// already on the way.
    pub fn take_computer_turn(&mut self) -> Option<ComputerTurn> {
        if self.computer_pending {
            return None;
        }
        let turn = self.session.computer_turn()?;
        self.computer_pending = true;
        Some(turn)
    }

    /// Applies a computer move coming back from the background task.
    pub fn receive_computer_move(&mut self, mov: ComputerMove) {
        if mov.generation != self.session.generation() {
            debug!(stale = mov.generation, "Ignoring move for a previous game");
            return;
        }
        self.computer_pending = false;
        if let Some(outcome) = self.session.apply_computer_move(mov) {
            debug!(index = mov.index, %outcome, "Computer moved");
        }
    }

    fn play_cursor(&mut self) {
        let index = self.cursor.index();
        match self.session.play(index) {
            Ok(outcome) => {
                debug!(index, %outcome, "Move applied to UI state");
                self.message = None;
            }
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn restart(&mut self) {
        debug!("Restarting game");
        self.session.reset();
        self.computer_pending = false;
        self.message = Some("New game".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_tictactoe::{Mark, Square};

    fn two_player() -> App {
        App::new(SessionConfig::default().with_vs_computer(false))
    }

    #[test]
    fn test_enter_places_mark_under_cursor() {
        let mut app = two_player();
        assert_eq!(app.handle_key(KeyCode::Enter), AppAction::Continue);
        let board = app.session().game().board();
        assert_eq!(board.get(13), Some(Square::Occupied(Mark::X)));
        assert_eq!(app.status(), "Next player: Player O (O)");
    }

    #[test]
    fn test_occupied_square_shows_message() {
        let mut app = two_player();
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char(' '));
        assert!(app.status().contains("already occupied"));
        assert_eq!(app.session().game().board().count(Mark::O), 0);
    }

    #[test]
    fn test_navigation_then_play() {
        let mut app = two_player();
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Right);
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.session().game().board().get(26),
            Some(Square::Occupied(Mark::X))
        );
    }

    #[test]
    fn test_quit_keys() {
        let mut app = two_player();
        assert_eq!(app.handle_key(KeyCode::Char('q')), AppAction::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), AppAction::Quit);
    }

    #[test]
    fn test_computer_turn_taken_once() {
        let mut app = App::new(SessionConfig::default());
        assert!(app.take_computer_turn().is_none());
        app.handle_key(KeyCode::Enter);
        let turn = app.take_computer_turn().unwrap();
        assert!(app.take_computer_turn().is_none());
        assert!(app.status().contains("thinking"));

        app.receive_computer_move(ComputerMove {
            generation: turn.generation,
            index: 0,
        });
        assert!(!app.computer_pending());
        assert_eq!(app.session().game().board().count(Mark::O), 1);
    }

    #[test]
    fn test_restart_discards_pending_move() {
        let mut app = App::new(SessionConfig::default());
        app.handle_key(KeyCode::Enter);
        let turn = app.take_computer_turn().unwrap();
        app.handle_key(KeyCode::Char('r'));
        assert!(!app.computer_pending());

        app.receive_computer_move(ComputerMove {
            generation: turn.generation,
            index: 0,
        });
        assert_eq!(app.session().game().board().count(Mark::O), 0);
        assert_eq!(app.session().game().board().count(Mark::X), 0);
    }
}
