//! 3x3x3 tic-tac-toe: rules engine and computer opponent.

pub mod action;
pub mod ai;
pub mod contracts;
pub mod game;
pub mod lines;
pub mod rules;
pub mod types;

pub use action::{IllegalMoveError, Move};
pub use ai::{Difficulty, request_computer_move, select_move, select_move_with_rng};
pub use contracts::{LegalMove, apply_move, is_legal_move, request_move};
pub use game::{Game, new_game};
pub use lines::{LINE_COUNT, LineCategory, WINNING_LINES, WinningLine};
pub use rules::{detect_outcome, winning_line};
pub use types::{Board, BoardParseError, CELL_COUNT, Coord, Layer, Mark, Outcome, Square};
