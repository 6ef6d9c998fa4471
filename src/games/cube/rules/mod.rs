//! Game rules for cube tic-tac-toe.
//!
//! Pure functions evaluating a board. The outcome is never stored;
//! callers derive it from the board whenever they need it.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, winning_line};

use super::types::{Board, Mark, Outcome};
use tracing::instrument;

/// Derives the outcome of a board.
///
/// The first completed line in table order decides the winner. A full
/// board without a completed line is a draw.
#[instrument(level = "trace", skip(board))]
pub fn detect_outcome(board: &Board) -> Outcome {
    classify(check_winner(board), is_full(board))
}

fn classify(winner: Option<Mark>, full: bool) -> Outcome {
    match (winner, full) {
        (Some(mark), _) => Outcome::Won(mark),
        (None, true) => Outcome::Draw,
        (None, false) => Outcome::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::super::lines::WINNING_LINES;
    use super::super::types::{CELL_COUNT, Square};
    use super::*;

    fn board_with(cells: &[usize], mark: Mark) -> Board {
        let mut board = Board::new();
        for &i in cells {
            board.place(i, mark);
        }
        board
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(detect_outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_every_line_wins_for_both_marks() {
        for line in &WINNING_LINES {
            for mark in [Mark::X, Mark::O] {
                let board = board_with(&line.cells, mark);
                assert_eq!(detect_outcome(&board), Outcome::Won(mark), "{:?}", line);
            }
        }
    }

    #[test]
    fn test_layer_diagonal_example() {
        let board = board_with(&[0, 4, 8], Mark::X);
        assert_eq!(detect_outcome(&board), Outcome::Won(Mark::X));
        assert_eq!(winning_line(&board).map(|l| l.cells), Some([0, 4, 8]));
    }

    #[test]
    fn test_single_center_against_rest() {
        let mut squares = [Square::Occupied(Mark::O); CELL_COUNT];
        squares[13] = Square::Occupied(Mark::X);
        let board = Board::from_squares(squares);
        assert_eq!(detect_outcome(&board), Outcome::Won(Mark::O));
        assert_eq!(winning_line(&board).map(|l| l.cells), Some([0, 1, 2]));
    }

    #[test]
    fn test_partial_board_without_line_in_progress() {
        let board = board_with(&[0, 1, 3, 5], Mark::X);
        assert_eq!(detect_outcome(&board), Outcome::InProgress);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        assert_eq!(classify(None, true), Outcome::Draw);
        assert_eq!(classify(None, false), Outcome::InProgress);
        assert_eq!(classify(Some(Mark::O), true), Outcome::Won(Mark::O));
    }

    #[test]
    fn test_outcome_is_idempotent() {
        let board: Board = "XO.O.X... .X.O...X. ..O......".parse().unwrap();
        assert_eq!(detect_outcome(&board), detect_outcome(&board));
    }
}
