//! The 49 winning lines of the cube.
//!
//! The table order is also the scan order of win detection.

use super::types::CENTER;
use serde::Serialize;

/// Geometric family a winning line belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display, strum::EnumIter,
)]
pub enum LineCategory {
    /// Along a row of one layer.
    Horizontal,
    /// Along a column of one layer.
    Vertical,
    /// Front to back through the same row and column.
    Depth,
    /// Diagonal inside one layer.
    LayerDiagonal,
    /// Corner to opposite corner through the center of the cube.
    SpaceDiagonal,
    /// Diagonal of a plane that cuts through all three layers.
    CrossLayerDiagonal,
}

impl LineCategory {
    /// Number of lines in this category.
    pub fn expected_count(self) -> usize {
        match self {
            LineCategory::Horizontal | LineCategory::Vertical | LineCategory::Depth => 9,
            LineCategory::LayerDiagonal => 6,
            LineCategory::SpaceDiagonal => 4,
            LineCategory::CrossLayerDiagonal => 12,
        }
    }
}

/// Three squares that win the game when held by one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WinningLine {
    /// Board indices, outer squares first and last.
    pub cells: [usize; 3],
    /// Family of the line.
    pub category: LineCategory,
}

impl WinningLine {
    const fn new(cells: [usize; 3], category: LineCategory) -> Self {
        Self { cells, category }
    }

    /// Returns true if the line passes through the given index.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }

    /// Returns true if the line passes through the middle of the cube.
    pub fn through_center(&self) -> bool {
        self.contains(CENTER)
    }
}

use LineCategory::{
    CrossLayerDiagonal as C, Depth as D, Horizontal as H, LayerDiagonal as L, SpaceDiagonal as S,
    Vertical as V,
};

/// Total number of winning lines.
pub const LINE_COUNT: usize = 49;

/// Every winning line, grouped by category.
pub const WINNING_LINES: [WinningLine; LINE_COUNT] = [
    // Rows, front / middle / back
    WinningLine::new([0, 1, 2], H),
    WinningLine::new([3, 4, 5], H),
    WinningLine::new([6, 7, 8], H),
    WinningLine::new([9, 10, 11], H),
    WinningLine::new([12, 13, 14], H),
    WinningLine::new([15, 16, 17], H),
    WinningLine::new([18, 19, 20], H),
    WinningLine::new([21, 22, 23], H),
    WinningLine::new([24, 25, 26], H),
    // Columns
    WinningLine::new([0, 3, 6], V),
    WinningLine::new([1, 4, 7], V),
    WinningLine::new([2, 5, 8], V),
    WinningLine::new([9, 12, 15], V),
    WinningLine::new([10, 13, 16], V),
    WinningLine::new([11, 14, 17], V),
    WinningLine::new([18, 21, 24], V),
    WinningLine::new([19, 22, 25], V),
    WinningLine::new([20, 23, 26], V),
    // Depth
    WinningLine::new([0, 9, 18], D),
    WinningLine::new([1, 10, 19], D),
    WinningLine::new([2, 11, 20], D),
    WinningLine::new([3, 12, 21], D),
    WinningLine::new([4, 13, 22], D),
    WinningLine::new([5, 14, 23], D),
    WinningLine::new([6, 15, 24], D),
    WinningLine::new([7, 16, 25], D),
    WinningLine::new([8, 17, 26], D),
    // In-layer diagonals
    WinningLine::new([0, 4, 8], L),
    WinningLine::new([2, 4, 6], L),
    WinningLine::new([9, 13, 17], L),
    WinningLine::new([11, 13, 15], L),
    WinningLine::new([18, 22, 26], L),
    WinningLine::new([20, 22, 24], L),
    // Corner to corner
    WinningLine::new([0, 13, 26], S),
    WinningLine::new([2, 13, 24], S),
    WinningLine::new([6, 13, 20], S),
    WinningLine::new([8, 13, 18], S),
    // Row planes
    WinningLine::new([0, 10, 20], C),
    WinningLine::new([2, 10, 18], C),
    WinningLine::new([3, 13, 23], C),
    WinningLine::new([5, 13, 21], C),
    WinningLine::new([6, 16, 26], C),
    WinningLine::new([8, 16, 24], C),
    // Column planes
    WinningLine::new([0, 12, 24], C),
    WinningLine::new([6, 12, 18], C),
    WinningLine::new([1, 13, 25], C),
    WinningLine::new([7, 13, 19], C),
    WinningLine::new([2, 14, 26], C),
    WinningLine::new([8, 14, 20], C),
];

/// Lines passing through the given index, in table order.
pub fn lines_through(index: usize) -> impl Iterator<Item = &'static WinningLine> {
    WINNING_LINES.iter().filter(move |line| line.contains(index))
}
