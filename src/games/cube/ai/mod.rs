//! Computer opponent.
//!
//! Three strategies share the rules engine's win detection:
//!
//! - **Easy**: a random empty square.
//! - **Medium**: win now if possible, otherwise block an immediate loss,
//!   otherwise random.
//! - **Hard**: depth-limited minimax, deterministic for a given board.

mod heuristic;
mod minimax;
mod random;

pub use minimax::{SEARCH_DEPTH, WIN_SCORE, score_moves};

use super::lines::lines_through;
use super::rules::detect_outcome;
use super::types::{Board, Mark, Square};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Strength of the computer opponent, fixed for a session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Random empty square.
    Easy,
    /// One-move lookahead: win, else block, else random.
    #[default]
    Medium,
    /// Three-ply minimax.
    Hard,
}

/// Picks a move for `mark` using the thread-local RNG.
///
/// Returns `None` when the board is already decided, which includes a
/// full board.
#[instrument(skip(board))]
pub fn select_move(board: &Board, mark: Mark, difficulty: Difficulty) -> Option<usize> {
    select_move_with_rng(board, mark, difficulty, &mut rand::thread_rng())
}

/// Picks a move for `mark` with a caller-supplied RNG.
#[instrument(skip(board, rng))]
pub fn select_move_with_rng<R: Rng + ?Sized>(
    board: &Board,
    mark: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<usize> {
    let outcome = detect_outcome(board);
    if outcome.is_terminal() {
        warn!(%outcome, "Computer asked to move on a finished board");
        return None;
    }

    let choice = match difficulty {
        Difficulty::Easy => random::choose(board, rng),
        Difficulty::Medium => heuristic::choose(board, mark, rng),
        Difficulty::Hard => minimax::best_move(board, mark),
    };
    debug!(?choice, "Computer chose move");
    choice
}

/// Boundary entry point for the front end.
pub fn request_computer_move(board: &Board, mark: Mark, difficulty: Difficulty) -> Option<usize> {
    select_move(board, mark, difficulty)
}

/// Returns true if placing `mark` at `index` completes a line for it.
///
/// Only the lines through `index` can be completed by the placement.
pub fn wins_immediately(board: &Board, index: usize, mark: Mark) -> bool {
    board.is_empty(index)
        && lines_through(index).any(|line| {
            line.cells
                .iter()
                .all(|&cell| cell == index || board.get(cell) == Some(Square::Occupied(mark)))
        })
}

/// First empty index, ascending, where `mark` wins at once.
pub fn first_winning_move(board: &Board, mark: Mark) -> Option<usize> {
    board
        .empty_indices()
        .into_iter()
        .find(|&index| wins_immediately(board, index, mark))
}
