//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use cube_tictactoe::{Coord, Layer};

/// Moves the cursor for a navigation key.
///
/// Arrows stay inside the current layer and stop at its edges. Layer
/// keys (Tab / BackTab, `]` / `[`) wrap around the cube.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let Coord { layer, row, col } = cursor;
    let moved = match key {
        KeyCode::Up => Coord::new(layer, row.saturating_sub(1), col),
        KeyCode::Down => Coord::new(layer, row + 1, col),
        KeyCode::Left => Coord::new(layer, row, col.saturating_sub(1)),
        KeyCode::Right => Coord::new(layer, row, col + 1),
        KeyCode::Tab | KeyCode::Char(']') => Coord::new(layer.next(), row, col),
        KeyCode::BackTab | KeyCode::Char('[') => Coord::new(layer.previous(), row, col),
        _ => None,
    };
    moved.unwrap_or(cursor)
}

/// Starting cursor: the middle of the cube.
pub fn home() -> Coord {
    Coord {
        layer: Layer::Middle,
        row: 1,
        col: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(layer: Layer, row: usize, col: usize) -> Coord {
        Coord::new(layer, row, col).unwrap()
    }

    #[test]
    fn test_arrows_move_within_layer() {
        let start = home();
        assert_eq!(move_cursor(start, KeyCode::Up), at(Layer::Middle, 0, 1));
        assert_eq!(move_cursor(start, KeyCode::Right), at(Layer::Middle, 1, 2));
        assert_eq!(move_cursor(start, KeyCode::Down).index(), 16);
    }

    #[test]
    fn test_arrows_stop_at_edges() {
        let corner = at(Layer::Front, 0, 0);
        assert_eq!(move_cursor(corner, KeyCode::Up), corner);
        assert_eq!(move_cursor(corner, KeyCode::Left), corner);
        let far = at(Layer::Back, 2, 2);
        assert_eq!(move_cursor(far, KeyCode::Down), far);
        assert_eq!(move_cursor(far, KeyCode::Right), far);
    }

    #[test]
    fn test_layer_keys_wrap() {
        let back = at(Layer::Back, 0, 2);
        assert_eq!(move_cursor(back, KeyCode::Tab), at(Layer::Front, 0, 2));
        assert_eq!(move_cursor(back, KeyCode::Char('[')), at(Layer::Middle, 0, 2));
        assert_eq!(
            move_cursor(at(Layer::Front, 1, 1), KeyCode::BackTab),
            at(Layer::Back, 1, 1)
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(home(), KeyCode::Char('x')), home());
    }
}
