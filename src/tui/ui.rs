//! Stateless UI rendering for the cube.

use super::app::App;
use cube_tictactoe::{Board, Coord, Layer, Mark, Square, winning_line};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;

const HELP: &str =
    "Arrows: move | Tab/[ ]: layer | Enter/Space: place | r: restart | q: quit";

/// Renders the three layers with cursor and winning-line highlights.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(7),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Cube Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app.session().game().board(), app.cursor());

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Coord) {
    let board_area = center_rect(area, 56, 5);
    let highlighted = winning_line(board).map(|line| line.cells);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(18),
            Constraint::Length(1),
            Constraint::Length(18),
            Constraint::Length(1),
            Constraint::Length(18),
        ])
        .split(board_area);

    for (slot, layer) in Layer::iter().enumerate() {
        draw_layer(frame, columns[slot * 2], board, layer, cursor, highlighted);
    }
}

fn draw_layer(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    layer: Layer,
    cursor: Coord,
    highlighted: Option<[usize; 3]>,
) {
    let border_style = if layer == cursor.layer {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let rows: Vec<Line> = (0..3)
        .map(|row| {
            let spans: Vec<Span> = (0..3)
                .filter_map(|col| Coord::new(layer, row, col))
                .map(|coord| cell(board, coord, cursor, highlighted))
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(rows).alignment(Alignment::Center).block(
        Block::default()
            .title(layer.to_string())
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);
}

fn cell(
    board: &Board,
    coord: Coord,
    cursor: Coord,
    highlighted: Option<[usize; 3]>,
) -> Span<'static> {
    let index = coord.index();
    let (symbol, base_style) = match board.at(coord) {
        Square::Empty => (" · ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Mark::X) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Mark::O) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if highlighted.is_some_and(|cells| cells.contains(&index)) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if coord == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    Span::styled(symbol, style)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
