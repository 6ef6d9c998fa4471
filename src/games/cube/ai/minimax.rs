//! Hard tier: fixed-depth minimax.
//!
//! The search does not solve the game. It looks [`SEARCH_DEPTH`] plies
//! ahead (the candidate move itself is the first ply) and scores every
//! undecided position at the horizon as 0.

use super::super::rules::detect_outcome;
use super::super::types::{Board, Mark, Outcome};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument, trace};

/// Plies searched, counting the root move.
pub const SEARCH_DEPTH: u32 = 3;

/// Score of a position won by the computer; a loss scores the negation.
pub const WIN_SCORE: i32 = 10;

/// A mark placed for the duration of one search branch.
///
/// The square is emptied again when the guard drops, on every exit path.
struct HypotheticalMove<'a> {
    board: &'a mut Board,
    index: usize,
}

impl<'a> HypotheticalMove<'a> {
    fn place(board: &'a mut Board, index: usize, mark: Mark) -> Self {
        board.place(index, mark);
        Self { board, index }
    }
}

impl Deref for HypotheticalMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for HypotheticalMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for HypotheticalMove<'_> {
    fn drop(&mut self) {
        self.board.clear(self.index);
    }
}

/// Root score of every empty square for `computer`, in ascending index order.
#[instrument(skip(board))]
pub fn score_moves(board: &Board, computer: Mark) -> Vec<(usize, i32)> {
    let mut scratch = *board;
    board
        .empty_indices()
        .into_iter()
        .map(|index| {
            let mut branch = HypotheticalMove::place(&mut scratch, index, computer);
            let score = minimax(&mut branch, computer, SEARCH_DEPTH - 1, false);
            (index, score)
        })
        .collect()
}

/// Highest-scoring square; ties go to the lowest index.
#[instrument(skip(board))]
pub fn best_move(board: &Board, computer: Mark) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;
    for (index, score) in score_moves(board, computer) {
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((index, score));
        }
    }
    debug!(?best, "Minimax result");
    best.map(|(index, _)| index)
}

fn minimax(board: &mut Board, computer: Mark, depth: u32, maximizing: bool) -> i32 {
    match detect_outcome(board) {
        Outcome::Won(mark) if mark == computer => return WIN_SCORE,
        Outcome::Won(_) => return -WIN_SCORE,
        Outcome::Draw => return 0,
        Outcome::InProgress if depth == 0 => return 0,
        Outcome::InProgress => {}
    }

    let to_move = if maximizing { computer } else { computer.opponent() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for index in board.empty_indices() {
        let mut branch = HypotheticalMove::place(board, index, to_move);
        let score = minimax(&mut branch, computer, depth - 1, !maximizing);
        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    trace!(depth, maximizing, best, "Scored node");
    best
}

#[cfg(test)]
mod tests {
    use super::super::super::contracts::apply_move;
    use super::super::super::types::Square;
    use super::*;

    #[test]
    fn test_guard_restores_square() {
        let mut board = Board::new();
        {
            let branch = HypotheticalMove::place(&mut board, 5, Mark::X);
            assert_eq!(branch.get(5), Some(Square::Occupied(Mark::X)));
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_guard_restores_square_on_panic() {
        let mut board = Board::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _branch = HypotheticalMove::place(&mut board, 7, Mark::O);
            panic!("evaluation failed");
        }));
        assert!(result.is_err());
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_immediate_win_scores_win() {
        let board = apply_move(&apply_move(&Board::new(), 0, Mark::X), 1, Mark::X);
        let scores = score_moves(&board, Mark::X);
        assert!(scores.contains(&(2, WIN_SCORE)));
    }

    #[test]
    fn test_empty_board_has_no_decided_square() {
        // Nothing can be won within three plies of an empty board, so the
        // first square wins the tie.
        assert!(score_moves(&Board::new(), Mark::X).iter().all(|&(_, s)| s == 0));
        assert_eq!(best_move(&Board::new(), Mark::X), Some(0));
    }
}
