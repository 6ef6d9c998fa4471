//! Game session: one game at a time, owned by a single front end.

use crate::config::SessionConfig;
use crate::games::cube::{Difficulty, Game, IllegalMoveError, Mark, Outcome, select_move};
use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument, warn};

/// Error returned when the session refuses a human move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// The core rejected the move.
    #[display("{}", _0)]
    IllegalMove(IllegalMoveError),

    /// It is the computer's turn.
    #[display("Waiting for the computer to move")]
    #[from(ignore)]
    ComputerToMove,
}

/// Snapshot handed to whoever computes the computer's move.
///
/// The generation ties the result back to the game it was computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerTurn {
    /// Session generation when the turn was issued.
    pub generation: u64,
    /// Game state to move from.
    pub game: Game,
    /// Mark the computer plays.
    pub mark: Mark,
    /// Strength of the computer.
    pub difficulty: Difficulty,
}

impl ComputerTurn {
    /// Runs the move selection for this snapshot.
    #[instrument(skip(self), fields(generation = self.generation, mark = %self.mark))]
    pub fn select(&self) -> Option<usize> {
        select_move(self.game.board(), self.mark, self.difficulty)
    }
}

/// A computed computer move on its way back to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerMove {
    /// Generation of the turn this move answers.
    pub generation: u64,
    /// Chosen board index.
    pub index: usize,
}

/// A running game plus the settings it was started with.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    game: Game,
    generation: u64,
}

impl GameSession {
    /// Creates a session and starts its first game.
    #[instrument(skip(config))]
    pub fn new(config: SessionConfig) -> Self {
        let game = Game::new(config.first_mark());
        info!(
            vs_computer = *config.vs_computer(),
            difficulty = %config.difficulty(),
            "Creating game session"
        );
        Self {
            config,
            game,
            generation: 0,
        }
    }

    /// Session settings.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Counter bumped by every reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current outcome of the game.
    pub fn outcome(&self) -> Outcome {
        self.game.outcome()
    }

    /// Discards the board and starts over.
    ///
    /// Computer moves computed for the old game are ignored afterwards.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn reset(&mut self) {
        self.game = Game::new(self.config.first_mark());
        self.generation += 1;
        info!(generation = self.generation, "Session reset");
    }

    /// Returns true if the game is running and the computer is to move.
    pub fn is_computer_turn(&self) -> bool {
        !self.game.is_over() && self.config.is_computer(self.game.to_move())
    }

    /// Plays a human move for the side to move.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn play(&mut self, index: usize) -> Result<Outcome, SessionError> {
        if self.is_computer_turn() {
            warn!(index, "Human move while computer is to move");
            return Err(SessionError::ComputerToMove);
        }
        let outcome = self.game.place(index)?;
        debug!(index, %outcome, "Human move applied");
        Ok(outcome)
    }

    /// Ticket for the computer's next move, if it is the computer's turn.
    pub fn computer_turn(&self) -> Option<ComputerTurn> {
        self.is_computer_turn().then(|| ComputerTurn {
            generation: self.generation,
            game: self.game,
            mark: self.game.to_move(),
            difficulty: *self.config.difficulty(),
        })
    }

    /// Applies a computer move unless it is stale.
    ///
    /// A move is stale when the session was reset after its turn was
    /// issued, or when the game no longer waits for the computer.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn apply_computer_move(&mut self, mov: ComputerMove) -> Option<Outcome> {
        if mov.generation != self.generation {
            debug!(stale = mov.generation, "Dropping computer move from an earlier game");
            return None;
        }
        if !self.is_computer_turn() {
            debug!("Dropping computer move, computer is not to move");
            return None;
        }
        match self.game.place(mov.index) {
            Ok(outcome) => {
                debug!(index = mov.index, %outcome, "Computer move applied");
                Some(outcome)
            }
            Err(e) => {
                warn!(index = mov.index, error = %e, "Computer produced an illegal move");
                None
            }
        }
    }

    /// Picks and applies the computer's move immediately.
    #[instrument(skip(self))]
    pub fn play_computer_now(&mut self) -> Option<Outcome> {
        let turn = self.computer_turn()?;
        let index = turn.select()?;
        self.apply_computer_move(ComputerMove {
            generation: turn.generation,
            index,
        })
    }

    /// Status line: next player, winner, or draw.
    pub fn status_text(&self) -> String {
        match self.outcome() {
            Outcome::Won(mark) => format!("Winner: {}", self.config.name_of(mark)),
            Outcome::Draw => "It's a draw!".to_string(),
            Outcome::InProgress => {
                let mark = self.game.to_move();
                format!("Next player: {} ({})", self.config.name_of(mark), mark)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::cube::Square;

    fn vs_computer(difficulty: Difficulty) -> GameSession {
        GameSession::new(
            SessionConfig::default()
                .with_difficulty(difficulty)
                .with_player_x("Ada")
                .with_player_o("Cube"),
        )
    }

    #[test]
    fn test_human_then_computer() {
        let mut session = vs_computer(Difficulty::Hard);
        assert!(!session.is_computer_turn());
        session.play(13).unwrap();
        assert!(session.is_computer_turn());
        assert_eq!(session.play(0), Err(SessionError::ComputerToMove));

        let outcome = session.play_computer_now();
        assert_eq!(outcome, Some(Outcome::InProgress));
        assert_eq!(session.game().board().count(Mark::O), 1);
        assert!(!session.is_computer_turn());
    }

    #[test]
    fn test_illegal_human_move_is_refused() {
        let mut session = vs_computer(Difficulty::Easy);
        session.play(4).unwrap();
        session.play_computer_now();
        let err = session.play(4).unwrap_err();
        assert_eq!(err, SessionError::IllegalMove(IllegalMoveError::Occupied(4)));
    }

    #[test]
    fn test_stale_computer_move_dropped_after_reset() {
        let mut session = vs_computer(Difficulty::Medium);
        session.play(0).unwrap();
        let turn = session.computer_turn().unwrap();
        session.reset();
        let applied = session.apply_computer_move(ComputerMove {
            generation: turn.generation,
            index: 5,
        });
        assert_eq!(applied, None);
        assert_eq!(session.game().board().get(5), Some(Square::Empty));
        assert_eq!(session.game().board().count(Mark::X), 0);
    }

    #[test]
    fn test_computer_move_dropped_when_not_its_turn() {
        let mut session = vs_computer(Difficulty::Medium);
        let applied = session.apply_computer_move(ComputerMove {
            generation: session.generation(),
            index: 5,
        });
        assert_eq!(applied, None);
    }

    #[test]
    fn test_two_player_session_has_no_computer() {
        let mut session = GameSession::new(SessionConfig::default().with_vs_computer(false));
        session.play(0).unwrap();
        assert!(session.computer_turn().is_none());
        session.play(1).unwrap();
        assert_eq!(session.game().to_move(), Mark::X);
    }

    #[test]
    fn test_computer_opens_when_it_moves_first() {
        let session = GameSession::new(SessionConfig::default().with_x_first(false));
        let turn = session.computer_turn().unwrap();
        assert_eq!(turn.mark, Mark::O);
    }

    #[test]
    fn test_status_text() {
        let mut session = GameSession::new(
            SessionConfig::default()
                .with_vs_computer(false)
                .with_player_x("Ada")
                .with_player_o("Bo"),
        );
        assert_eq!(session.status_text(), "Next player: Ada (X)");
        for index in [0, 1, 13, 2, 26] {
            session.play(index).unwrap();
        }
        assert_eq!(session.status_text(), "Winner: Ada");
    }
}
