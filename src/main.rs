//! Cube Tic-Tac-Toe - Unified CLI
//!
//! Terminal game, spectator mode and headless simulation.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use cube_tictactoe::{
    ComputerPlayer, Difficulty, GameEvent, Mark, Move, Orchestrator, SessionConfig, run_matches,
};
use std::path::Path;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            difficulty,
            two_player,
            computer_mark,
            o_first,
            player_x,
            player_o,
        } => {
            let config = load_session_config(
                &config,
                difficulty,
                two_player,
                computer_mark,
                o_first,
                player_x,
                player_o,
            )?;
            tui::run_tui(config).await
        }
        Command::Watch { x, o, delay_ms } => {
            initialize_tracing();
            watch(x, o, Duration::from_millis(delay_ms)).await
        }
        Command::Simulate {
            x,
            o,
            games,
            o_first,
            json,
        } => {
            initialize_tracing();
            let first = if o_first { Mark::O } else { Mark::X };
            let summary = run_matches(x, o, games, first).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", summary);
            }
            Ok(())
        }
    }
}

/// Reads the config file and applies command-line overrides.
#[instrument(skip(path, player_x, player_o), fields(path = %path.display()))]
fn load_session_config(
    path: &Path,
    difficulty: Option<Difficulty>,
    two_player: bool,
    computer_mark: Option<Mark>,
    o_first: bool,
    player_x: Option<String>,
    player_o: Option<String>,
) -> Result<SessionConfig> {
    let mut config = SessionConfig::load_or_default(path)?;

    if let Some(difficulty) = difficulty {
        config = config.with_difficulty(difficulty);
    }
    if two_player {
        config = config.with_vs_computer(false);
    }
    if let Some(mark) = computer_mark {
        config = config.with_computer_mark(mark);
    }
    if o_first {
        config = config.with_x_first(false);
    }
    if let Some(name) = player_x {
        config = config.with_player_x(name);
    }
    if let Some(name) = player_o {
        config = config.with_player_o(name);
    }

    Ok(config.validated()?)
}

/// Runs one computer game and prints the board after every move.
#[instrument]
async fn watch(x: Difficulty, o: Difficulty, delay: Duration) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut orchestrator = Orchestrator::new(
        Mark::X,
        Box::new(ComputerPlayer::new(format!("X ({})", x), x, delay)),
        Box::new(ComputerPlayer::new(format!("O ({})", o), o, delay)),
        Some(event_tx),
    );

    let game = tokio::spawn(async move { orchestrator.run().await });

    while let Some(event) = event_rx.recv().await {
        match event {
            GameEvent::MoveMade {
                player,
                mark,
                index,
                game,
            } => {
                println!("{}: {}", player, Move::new(mark, index));
                println!("{}", game.board().display());
            }
            GameEvent::GameOver { outcome, winner } => match winner {
                Some(name) => println!("{} ({})", outcome, name),
                None => println!("{}", outcome),
            },
        }
    }

    let outcome = game.await??;
    info!(%outcome, "Watched game finished");
    Ok(())
}

#[instrument]
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cube_tictactoe=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
