//! Core domain types for cube tic-tac-toe.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of squares on each side of the cube.
pub const SIDE: usize = 3;

/// Number of squares in one layer.
pub const LAYER_SIZE: usize = SIDE * SIDE;

/// Total number of squares on the board.
pub const CELL_COUNT: usize = LAYER_SIZE * SIDE;

/// Index of the square in the very middle of the cube.
pub const CENTER: usize = 13;

/// Mark placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark A.
    X,
    /// Mark B.
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// One of the three 3x3 slices of the cube, front to back.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::FromRepr,
)]
#[repr(u8)]
pub enum Layer {
    /// Layer 0 (indices 0-8).
    Front = 0,
    /// Layer 1 (indices 9-17).
    Middle = 1,
    /// Layer 2 (indices 18-26).
    Back = 2,
}

impl Layer {
    /// Zero-based layer number.
    pub fn depth(self) -> usize {
        self as usize
    }

    /// Layer behind this one, wrapping to the front.
    pub fn next(self) -> Self {
        Self::from_repr(((self.depth() + 1) % SIDE) as u8).unwrap_or(Layer::Front)
    }

    /// Layer in front of this one, wrapping to the back.
    pub fn previous(self) -> Self {
        Self::from_repr(((self.depth() + SIDE - 1) % SIDE) as u8).unwrap_or(Layer::Back)
    }
}

/// Layer/row/column address of a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Layer of the square.
    pub layer: Layer,
    /// Row within the layer (0 = top).
    pub row: usize,
    /// Column within the layer (0 = left).
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate; `None` if row or column is off the board.
    pub fn new(layer: Layer, row: usize, col: usize) -> Option<Self> {
        (row < SIDE && col < SIDE).then_some(Self { layer, row, col })
    }

    /// Decomposes a board index into layer, row and column.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        let layer = Layer::from_repr((index / LAYER_SIZE) as u8)?;
        Some(Self {
            layer,
            row: (index % LAYER_SIZE) / SIDE,
            col: index % SIDE,
        })
    }

    /// Board index of this coordinate.
    pub fn index(self) -> usize {
        self.layer.depth() * LAYER_SIZE + self.row * SIDE + self.col
    }
}

/// 3x3x3 board.
///
/// Squares are stored layer by layer, each layer in row-major order.
/// The public API only ever fills empty squares; clearing a square is
/// reserved to the search's scoped placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from explicit squares.
    pub fn from_squares(squares: [Square; CELL_COUNT]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given index (0-26).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Gets the square at the given coordinate.
    pub fn at(&self, coord: Coord) -> Square {
        self.get(coord.index()).unwrap_or_default()
    }

    /// Checks if a square exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Empty indices in ascending order.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of squares holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|square| **square == Square::Occupied(mark))
            .count()
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|square| *square != Square::Empty)
    }

    /// Places a mark. Callers check legality first.
    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        self.squares[index] = Square::Occupied(mark);
    }

    /// Empties a square again. Only used to undo a hypothetical placement.
    pub(crate) fn clear(&mut self, index: usize) {
        self.squares[index] = Square::Empty;
    }

    /// Formats the board as three layers side by side.
    #[instrument(skip(self))]
    pub fn display(&self) -> String {
        let mut result = String::from("Front   Middle  Back\n");
        for row in 0..SIDE {
            for layer in 0..SIDE {
                for col in 0..SIDE {
                    let index = layer * LAYER_SIZE + row * SIDE + col;
                    result.push(match self.squares[index] {
                        Square::Empty => '.',
                        Square::Occupied(Mark::X) => 'X',
                        Square::Occupied(Mark::O) => 'O',
                    });
                }
                if layer < SIDE - 1 {
                    result.push_str("     ");
                }
            }
            result.push('\n');
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Error returned when a board string cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardParseError {
    /// A character other than a mark or an empty-square marker.
    #[display("Unexpected square '{}'", _0)]
    UnexpectedSquare(#[error(not(source))] char),

    /// Wrong number of squares; holds the count found.
    #[display("Expected {} squares, found {}", CELL_COUNT, _0)]
    WrongLength(#[error(not(source))] usize),
}

impl std::str::FromStr for Board {
    type Err = BoardParseError;

    /// Parses 27 characters of `X`, `O` or `.` (whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != CELL_COUNT {
            return Err(BoardParseError::WrongLength(cells.len()));
        }
        let mut squares = [Square::Empty; CELL_COUNT];
        for (square, ch) in squares.iter_mut().zip(cells) {
            *square = match ch {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '-' => Square::Empty,
                other => return Err(BoardParseError::UnexpectedSquare(other)),
            };
        }
        Ok(Self { squares })
    }
}

/// Derived status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// Board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns true once the game can no longer accept moves.
    pub fn is_terminal(self) -> bool {
        self != Outcome::InProgress
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_decomposition() {
        let coord = Coord::from_index(23).unwrap();
        assert_eq!(coord.layer, Layer::Back);
        assert_eq!(coord.row, 1);
        assert_eq!(coord.col, 2);
        assert_eq!(coord.index(), 23);
    }

    #[test]
    fn test_coord_round_trip_all_indices() {
        for index in 0..CELL_COUNT {
            assert_eq!(Coord::from_index(index).unwrap().index(), index);
        }
        assert!(Coord::from_index(CELL_COUNT).is_none());
    }

    #[test]
    fn test_center_is_middle_layer_center() {
        let coord = Coord::from_index(CENTER).unwrap();
        assert_eq!((coord.layer, coord.row, coord.col), (Layer::Middle, 1, 1));
    }

    #[test]
    fn test_layer_cycling() {
        assert_eq!(Layer::Front.next(), Layer::Middle);
        assert_eq!(Layer::Back.next(), Layer::Front);
        assert_eq!(Layer::Front.previous(), Layer::Back);
    }

    #[test]
    fn test_empty_indices_ascending() {
        let mut board = Board::new();
        board.place(0, Mark::X);
        board.place(13, Mark::O);
        let empty = board.empty_indices();
        assert_eq!(empty.len(), 25);
        assert_eq!(empty[0], 1);
        assert!(empty.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_parse_board() {
        let board: Board = "XO. ... ... ... .X. ... ... ... ..O".parse().unwrap();
        assert_eq!(board.get(0), Some(Square::Occupied(Mark::X)));
        assert_eq!(board.get(1), Some(Square::Occupied(Mark::O)));
        assert_eq!(board.get(13), Some(Square::Occupied(Mark::X)));
        assert_eq!(board.get(26), Some(Square::Occupied(Mark::O)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("XO".parse::<Board>(), Err(BoardParseError::WrongLength(2)));
        assert_eq!(
            ".".repeat(28).parse::<Board>(),
            Err(BoardParseError::WrongLength(28))
        );
        assert_eq!(
            "Z".repeat(27).parse::<Board>(),
            Err(BoardParseError::UnexpectedSquare('Z'))
        );
        let err = "XO".parse::<Board>().unwrap_err();
        assert_eq!(err.to_string(), "Expected 27 squares, found 2");
    }

    #[test]
    fn test_display_shows_three_layers() {
        let mut board = Board::new();
        board.place(0, Mark::X);
        board.place(26, Mark::O);
        let text = board.display();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("X.."));
        assert!(lines[3].ends_with("..O"));
    }
}
