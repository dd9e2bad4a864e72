//! Stateless UI rendering for the full-screen board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Circle, Context, Line},
    },
};
use tictactoe_engine::{Board, Mark};

/// Fraction of a cell left blank around a drawn mark.
const MARK_MARGIN: f64 = 0.22;

/// Splits the screen into title, board and status areas.
fn split(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(1), // Title
        Constraint::Min(3),    // Board
        Constraint::Length(3), // Status
    ])
    .areas(area)
}

/// Outer rectangle of the board canvas, centred and roughly square.
///
/// Terminal cells are about twice as tall as they are wide, so the
/// board is twice as many columns wide as it is rows tall.
pub fn board_area(area: Rect) -> Rect {
    let [_, middle, _] = split(area);
    let height = middle.height.min(middle.width / 2);
    let width = height * 2;
    Rect {
        x: middle.x + (middle.width - width) / 2,
        y: middle.y + (middle.height - height) / 2,
        width,
        height,
    }
}

/// Drawable area inside the board border.
pub fn board_inner(area: Rect) -> Rect {
    board_block().inner(board_area(area))
}

fn board_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

/// Renders title, board and status line.
pub fn draw(frame: &mut Frame, board: &Board, status: &str, status_color: Color) {
    let [title_area, _, status_area] = split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    draw_board(frame, board_area(frame.area()), board);

    let status_text = Paragraph::new(status)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, status_area);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board) {
    let n = board.size() as f64;
    let canvas = Canvas::default()
        .block(board_block())
        .marker(Marker::Braille)
        .x_bounds([0.0, n])
        .y_bounds([0.0, n])
        .paint(|ctx| {
            draw_grid(ctx, board.size());
            for (row, cells) in board.rows().enumerate() {
                for (col, cell) in cells.iter().enumerate() {
                    if let Some(mark) = cell.mark() {
                        draw_mark(ctx, board.size(), row, col, mark);
                    }
                }
            }
        });
    frame.render_widget(canvas, area);
}

fn draw_grid(ctx: &mut Context, size: usize) {
    let n = size as f64;
    for i in 1..size {
        let at = i as f64;
        ctx.draw(&Line {
            x1: at,
            y1: 0.0,
            x2: at,
            y2: n,
            color: Color::Gray,
        });
        ctx.draw(&Line {
            x1: 0.0,
            y1: at,
            x2: n,
            y2: at,
            color: Color::Gray,
        });
    }
}

/// Draws X as two strokes and O as a circle in the given cell.
///
/// Canvas y grows upwards, so row 0 sits at the top of the y range.
fn draw_mark(ctx: &mut Context, size: usize, row: usize, col: usize, mark: Mark) {
    let left = col as f64;
    let bottom = (size - 1 - row) as f64;

    match mark {
        Mark::X => {
            let (lo, hi) = (MARK_MARGIN, 1.0 - MARK_MARGIN);
            ctx.draw(&Line {
                x1: left + lo,
                y1: bottom + lo,
                x2: left + hi,
                y2: bottom + hi,
                color: Color::Blue,
            });
            ctx.draw(&Line {
                x1: left + lo,
                y1: bottom + hi,
                x2: left + hi,
                y2: bottom + lo,
                color: Color::Blue,
            });
        }
        Mark::O => ctx.draw(&Circle {
            x: left + 0.5,
            y: bottom + 0.5,
            radius: 0.5 - MARK_MARGIN,
            color: Color::Red,
        }),
    }
}
