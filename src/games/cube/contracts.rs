//! Move legality and application.
//!
//! A move is only applied after its precondition holds, so a refused
//! move never leaves a partially updated board behind.

use super::action::{IllegalMoveError, Move};
use super::rules::detect_outcome;
use super::types::{Board, CELL_COUNT, Mark, Outcome, Square};
use tracing::{instrument, warn};

/// Precondition: the game has no outcome yet.
pub struct GameInProgress;

impl GameInProgress {
    /// Checks that the outcome still allows moves.
    pub fn check(outcome: Outcome) -> Result<(), IllegalMoveError> {
        if outcome.is_terminal() {
            Err(IllegalMoveError::GameOver(outcome))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the index is on the board.
pub struct IndexInRange;

impl IndexInRange {
    /// Checks that the index addresses one of the 27 squares.
    pub fn check(index: usize) -> Result<(), IllegalMoveError> {
        if index >= CELL_COUNT {
            Err(IllegalMoveError::OutOfRange(index))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the index is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks that nothing has been placed at the index.
    pub fn check(board: &Board, index: usize) -> Result<(), IllegalMoveError> {
        match board.get(index) {
            Some(Square::Empty) => Ok(()),
            Some(Square::Occupied(_)) => Err(IllegalMoveError::Occupied(index)),
            None => Err(IllegalMoveError::OutOfRange(index)),
        }
    }
}

/// Composite precondition for placing a mark.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move at `index`.
    #[instrument(skip(board))]
    pub fn check(board: &Board, index: usize, outcome: Outcome) -> Result<(), IllegalMoveError> {
        GameInProgress::check(outcome)?;
        IndexInRange::check(index)?;
        SquareIsEmpty::check(board, index)?;
        Ok(())
    }
}

/// Returns true if a mark may be placed at `index`.
pub fn is_legal_move(board: &Board, index: usize, outcome: Outcome) -> bool {
    LegalMove::check(board, index, outcome).is_ok()
}

/// Returns a copy of `board` with `mark` placed at `index`.
///
/// Callers check [`LegalMove`] first; every other square is unchanged.
#[instrument(level = "trace", skip(board))]
pub fn apply_move(board: &Board, index: usize, mark: Mark) -> Board {
    debug_assert!(board.is_empty(index), "square {} is not empty", index);
    let mut next = *board;
    next.place(index, mark);
    next
}

/// Checks and applies a move in one step.
#[instrument(skip(board))]
pub fn request_move(board: &Board, index: usize, mark: Mark) -> Result<Board, IllegalMoveError> {
    let outcome = detect_outcome(board);
    LegalMove::check(board, index, outcome).inspect_err(|e| {
        warn!(index, mark = %mark, error = %e, "Refused move");
    })?;
    Ok(apply_move(board, index, mark))
}

/// Checks and applies a [`Move`].
pub fn request(board: &Board, mov: Move) -> Result<Board, IllegalMoveError> {
    request_move(board, mov.index, mov.mark)
}
