//! Win detection over the line table.

use super::super::lines::{WINNING_LINES, WinningLine};
use super::super::types::{Board, Mark, Square};
use tracing::instrument;

/// First line in table order held entirely by one mark.
#[instrument(level = "trace", skip(board))]
pub fn winning_line(board: &Board) -> Option<&'static WinningLine> {
    WINNING_LINES.iter().find(|line| {
        let [a, b, c] = line.cells;
        let sq = board.get(a);
        sq != Some(Square::Empty) && sq == board.get(b) && sq == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` if the mark holds a full line, `None` otherwise.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board)
        .and_then(|line| board.get(line.cells[0]))
        .and_then(Square::mark)
}

/// Returns true if `mark` holds a full line.
pub fn has_won(board: &Board, mark: Mark) -> bool {
    check_winner(board) == Some(mark)
}
