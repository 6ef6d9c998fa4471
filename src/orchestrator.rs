//! Game orchestration between players.

use crate::games::cube::{Game, Mark, Outcome};
use crate::players::{ComputerPlayer, Player};
use crate::session::{ComputerMove, ComputerTurn};
use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Messages sent from the orchestrator to whoever renders the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A move was applied.
    MoveMade {
        /// Name of the player who moved.
        player: String,
        /// Mark placed.
        mark: Mark,
        /// Board index.
        index: usize,
        /// Game after the move.
        game: Game,
    },
    /// Game ended.
    GameOver {
        /// Final outcome.
        outcome: Outcome,
        /// Winner's name, `None` on a draw.
        winner: Option<String>,
    },
}

/// Orchestrates a game between two players.
pub struct Orchestrator {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: Option<mpsc::UnboundedSender<GameEvent>>,
}

impl Orchestrator {
    /// Creates a new orchestrator; `first` opens the game.
    pub fn new(
        first: Mark,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: Option<mpsc::UnboundedSender<GameEvent>>,
    ) -> Self {
        Self {
            game: Game::new(first),
            player_x,
            player_o,
            event_tx,
        }
    }

    /// Current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    fn emit(&self, event: GameEvent) -> Result<()> {
        if let Some(tx) = &self.event_tx {
            tx.send(event)?;
        }
        Ok(())
    }

    /// Runs the game loop until the game ends.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub async fn run(&mut self) -> Result<Outcome> {
        info!("Starting game orchestration");

        loop {
            let outcome = self.game.outcome();
            if outcome.is_terminal() {
                let winner = outcome.winner().map(|mark| match mark {
                    Mark::X => self.player_x.name().to_string(),
                    Mark::O => self.player_o.name().to_string(),
                });
                info!(%outcome, "Game finished");
                self.emit(GameEvent::GameOver { outcome, winner })?;
                return Ok(outcome);
            }

            let mark = self.game.to_move();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let player_name = player.name().to_string();

            debug!(player = %player_name, mark = %mark, "Waiting for move");
            let index = player.get_move(&self.game).await?;

            self.game
                .place(index)
                .map_err(|e| anyhow::anyhow!("{} played an illegal move: {}", player_name, e))?;

            self.emit(GameEvent::MoveMade {
                player: player_name,
                mark,
                index,
                game: self.game,
            })?;
        }
    }
}

/// Computes a computer move in the background and posts it back.
///
/// The task sleeps for the player's delay first. Nothing cancels it; the
/// receiving session drops the move if it has become stale.
#[instrument(skip(player, tx), fields(generation = turn.generation))]
pub fn schedule_computer_move(
    turn: ComputerTurn,
    mut player: ComputerPlayer,
    tx: mpsc::UnboundedSender<ComputerMove>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        match player.get_move(&turn.game).await {
            Ok(index) => {
                let mov = ComputerMove {
                    generation: turn.generation,
                    index,
                };
                if tx.send(mov).is_err() {
                    debug!("Session gone before computer move arrived");
                }
            }
            Err(e) => warn!(error = %e, "Computer could not move"),
        }
    })
}
