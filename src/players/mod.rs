//! Player trait and implementations.

mod computer;

pub use computer::ComputerPlayer;

use crate::games::cube::Game;
use anyhow::Result;

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move from this player.
    ///
    /// Returns the board index (0-26) for the next move of the mark
    /// currently to move in `game`.
    async fn get_move(&mut self, game: &Game) -> Result<usize>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
