//! Medium tier: one-ply lookahead.
//!
//! Only single-move threats are considered. Forks and deeper threats are
//! left to the hard tier.

use super::super::types::{Board, Mark};
use super::{first_winning_move, random};
use rand::Rng;
use tracing::debug;

/// Wins if possible, else blocks, else plays randomly.
pub fn choose<R: Rng + ?Sized>(board: &Board, mark: Mark, rng: &mut R) -> Option<usize> {
    if let Some(index) = first_winning_move(board, mark) {
        debug!(index, "Taking winning square");
        return Some(index);
    }
    if let Some(index) = first_winning_move(board, mark.opponent()) {
        debug!(index, "Blocking opponent");
        return Some(index);
    }
    random::choose(board, rng)
}
