//! Moves and the error raised when one is refused.

use super::types::{CELL_COUNT, Coord, Mark, Outcome};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a mark placed at a board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Board index (0-26).
    pub index: usize,
}

impl Move {
    /// Layer/row/column of the move, if the index is on the board.
    #[instrument]
    pub fn coord(&self) -> Option<Coord> {
        Coord::from_index(self.index)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.coord() {
            Some(coord) => write!(
                f,
                "{} -> {} layer, row {}, column {}",
                self.mark,
                coord.layer,
                coord.row + 1,
                coord.col + 1
            ),
            None => write!(f, "{} -> {}", self.mark, self.index),
        }
    }
}

/// Reason a move was refused. No state changes when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum IllegalMoveError {
    /// Index is not on the board.
    #[display("Index {} is out of range (must be 0-{})", _0, CELL_COUNT - 1)]
    OutOfRange(#[error(not(source))] usize),

    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),

    /// The game already has an outcome.
    #[display("Game is already over ({})", _0)]
    GameOver(#[error(not(source))] Outcome),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display_names_layer() {
        let mov = Move::new(Mark::X, 23);
        assert_eq!(mov.to_string(), "X -> Back layer, row 2, column 3");
    }

    #[test]
    fn test_error_messages() {
        assert!(IllegalMoveError::OutOfRange(27).to_string().contains("0-26"));
        assert!(IllegalMoveError::Occupied(4).to_string().contains("occupied"));
        assert!(
            IllegalMoveError::GameOver(Outcome::Won(Mark::O))
                .to_string()
                .contains("O wins")
        );
    }
}
