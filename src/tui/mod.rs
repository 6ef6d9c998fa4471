//! Terminal UI for cube tic-tac-toe.

mod app;
mod input;
mod ui;

use anyhow::Result;
use app::{App, AppAction};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use cube_tictactoe::{ComputerMove, ComputerPlayer, SessionConfig, schedule_computer_move};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

const LOG_FILE: &str = "cube_tictactoe_tui.log";

/// Runs the interactive game until the user quits.
pub async fn run_tui(config: SessionConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(LOG_FILE)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("info,cube_tictactoe=debug")
                }),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting Cube Tic-Tac-Toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, App::new(config)).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draws, dispatches keys and ferries computer moves until quit.
#[instrument(skip_all)]
async fn run_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> Result<()> {
    let (move_tx, mut move_rx) = mpsc::unbounded_channel::<ComputerMove>();
    let delay = Duration::from_millis(*app.session().config().computer_delay_ms());

    loop {
        if let Some(turn) = app.take_computer_turn() {
            let name = app.session().config().name_of(turn.mark).to_string();
            schedule_computer_move(
                turn,
                ComputerPlayer::new(name, turn.difficulty, delay),
                move_tx.clone(),
            );
        }

        while let Ok(mov) = move_rx.try_recv() {
            app.receive_computer_move(mov);
        }

        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key.code) == AppAction::Quit {
                    return Ok(());
                }
            }
        }

        tokio::task::yield_now().await;
    }
}
