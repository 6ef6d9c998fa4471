//! Computer player backed by the move-selection engine.

use super::Player;
use crate::games::cube::{Difficulty, Game, select_move};
use anyhow::Result;
use std::time::Duration;
use tracing::{debug, instrument};

/// Computer opponent with a fixed difficulty.
#[derive(Debug, Clone, derive_new::new)]
pub struct ComputerPlayer {
    name: String,
    difficulty: Difficulty,
    /// Pause before answering, for pacing only.
    delay: Duration,
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    #[instrument(skip(self, game), fields(player = %self.name, difficulty = %self.difficulty))]
    async fn get_move(&mut self, game: &Game) -> Result<usize> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let mark = game.to_move();
        let index = select_move(game.board(), mark, self.difficulty)
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;
        debug!(index, mark = %mark, "Computer chose position");
        Ok(index)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
