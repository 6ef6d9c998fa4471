//! Easy tier: uniform choice among empty squares.

use super::super::types::Board;
use rand::Rng;
use rand::seq::SliceRandom;

/// Uniformly random empty index, or `None` on a full board.
pub fn choose<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    board.empty_indices().choose(rng).copied()
}
