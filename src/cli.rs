//! Command-line interface for cube_tictactoe.

use clap::{Parser, Subcommand};
use cube_tictactoe::{Difficulty, Mark};
use std::path::PathBuf;

/// Cube Tic-Tac-Toe - 3x3x3 tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "cube_tictactoe")]
#[command(about = "3x3x3 tic-tac-toe with a three-tier computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to session config file (defaults used if missing)
        #[arg(short, long, default_value = "cube_tictactoe.toml")]
        config: PathBuf,

        /// Computer difficulty, overrides the config file
        #[arg(short, long, value_enum)]
        difficulty: Option<Difficulty>,

        /// Two humans share the keyboard
        #[arg(long)]
        two_player: bool,

        /// Mark played by the computer (X or O)
        #[arg(long)]
        computer_mark: Option<Mark>,

        /// O opens the game
        #[arg(long)]
        o_first: bool,

        /// Display name for X
        #[arg(long)]
        player_x: Option<String>,

        /// Display name for O
        #[arg(long)]
        player_o: Option<String>,
    },

    /// Watch two computer players and print each move
    Watch {
        /// Difficulty of X
        #[arg(short, long, value_enum, default_value = "hard")]
        x: Difficulty,

        /// Difficulty of O
        #[arg(short, long, value_enum, default_value = "medium")]
        o: Difficulty,

        /// Pause between moves in milliseconds
        #[arg(long, default_value = "300")]
        delay_ms: u64,
    },

    /// Play a series of computer games and report the tally
    Simulate {
        /// Difficulty of X
        #[arg(short, long, value_enum, default_value = "medium")]
        x: Difficulty,

        /// Difficulty of O
        #[arg(short, long, value_enum, default_value = "medium")]
        o: Difficulty,

        /// Number of games
        #[arg(short = 'n', long, default_value = "100")]
        games: usize,

        /// O opens every game
        #[arg(long)]
        o_first: bool,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}
