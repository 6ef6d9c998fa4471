//! Game state: a board and the mark to move.

use super::action::IllegalMoveError;
use super::contracts::{LegalMove, apply_move};
use super::rules::detect_outcome;
use super::types::{Board, Mark, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Cube tic-tac-toe game.
///
/// The outcome is derived from the board on every call, so there is no
/// stored status to fall out of sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Mark,
}

impl Game {
    /// Creates a game with an empty board and `first` to move.
    #[instrument]
    pub fn new(first: Mark) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
        }
    }

    /// Resumes a game from an existing board.
    pub fn from_board(board: Board, to_move: Mark) -> Self {
        Self { board, to_move }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark whose turn it is. Meaningless once the game is over.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Current outcome, recomputed from the board.
    pub fn outcome(&self) -> Outcome {
        detect_outcome(&self.board)
    }

    /// Returns true once the game has a winner or the board is full.
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Places the mark to move at `index` and passes the turn.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn place(&mut self, index: usize) -> Result<Outcome, IllegalMoveError> {
        LegalMove::check(&self.board, index, self.outcome()).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;

        self.board = apply_move(&self.board, index, self.to_move);
        self.to_move = self.to_move.opponent();

        let outcome = self.outcome();
        if outcome.is_terminal() {
            info!(%outcome, "Game over");
        }
        Ok(outcome)
    }
}

/// Starts a game; mark A (X) moves first when `mark_a_first` is set.
#[instrument]
pub fn new_game(mark_a_first: bool) -> Game {
    Game::new(if mark_a_first { Mark::X } else { Mark::O })
}
