//! Cube tic-tac-toe library: 3x3x3 tic-tac-toe with a computer opponent.
//!
//! # Architecture
//!
//! - **Games**: board, winning lines, rules, legality and the computer
//!   opponent (`games::cube`)
//! - **Session**: one game at a time with its settings and the guard
//!   against stale computer moves
//! - **Players / Orchestrator**: async turn loop between two players
//! - **Simulate**: headless computer-versus-computer series
//!
//! # Example
//!
//! ```
//! use cube_tictactoe::{Difficulty, Mark, detect_outcome, new_game, select_move};
//!
//! let mut game = new_game(true);
//! game.place(13).unwrap();
//! let reply = select_move(game.board(), Mark::O, Difficulty::Hard).unwrap();
//! game.place(reply).unwrap();
//! assert!(!detect_outcome(game.board()).is_terminal());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod games;
pub mod orchestrator;
pub mod players;
pub mod session;
pub mod simulate;

// Crate-level exports - Configuration
pub use config::{ConfigError, SessionConfig};

// Crate-level exports - Game core
pub use games::cube::{
    Board, BoardParseError, CELL_COUNT, Coord, Difficulty, Game, IllegalMoveError, LINE_COUNT,
    Layer, LineCategory, Mark, Move, Outcome, Square, WINNING_LINES, WinningLine, apply_move,
    detect_outcome, is_legal_move, new_game, request_computer_move, request_move, select_move,
    select_move_with_rng, winning_line,
};

// Crate-level exports - Orchestration
pub use orchestrator::{GameEvent, Orchestrator, schedule_computer_move};
pub use players::{ComputerPlayer, Player};
pub use session::{ComputerMove, ComputerTurn, GameSession, SessionError};
pub use simulate::{MatchSummary, run_matches};
