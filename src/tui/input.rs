//! Mouse and keyboard input for the full-screen board.

use super::ui::board_inner;
use crate::error::InputError;
use crate::frontend::{InputEvent, MoveSource};
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use crossterm::terminal;
use ratatui::layout::Rect;
use tictactoe_engine::{Board, Mark};
use tracing::{debug, instrument};

/// Maps a screen coordinate to the board cell under it.
///
/// `inner` is the drawable board area; clicks outside it return `None`.
pub fn cell_at(inner: Rect, size: usize, column: u16, row: u16) -> Option<(usize, usize)> {
    let inside = column >= inner.x
        && column < inner.x + inner.width
        && row >= inner.y
        && row < inner.y + inner.height;
    if !inside {
        return None;
    }

    let cell_col = usize::from(column - inner.x) * size / usize::from(inner.width);
    let cell_row = usize::from(row - inner.y) * size / usize::from(inner.height);
    Some((cell_row, cell_col))
}

/// Translates a terminal event into a game input, given the screen area.
///
/// A resize is passed on so the board is redrawn before the next click is
/// mapped against the new layout.
pub fn translate(event: &Event, screen: Rect, size: usize) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(InputEvent::Quit)
            }
            _ => None,
        },
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            cell_at(board_inner(screen), size, mouse.column, mouse.row).map(|(row, col)| {
                InputEvent::Place {
                    row: row as i64,
                    col: col as i64,
                }
            })
        }
        Event::Resize(..) => Some(InputEvent::Resized),
        _ => None,
    }
}

/// Blocks on terminal events until a click lands on the board or the
/// player quits.
#[derive(Debug, Default)]
pub struct TuiInput;

impl TuiInput {
    /// Creates a new input source.
    pub fn new() -> Self {
        Self
    }
}

impl MoveSource for TuiInput {
    #[instrument(skip(self, board))]
    fn next_move(&mut self, board: &Board, mark: Mark) -> Result<InputEvent, InputError> {
        loop {
            let event = event::read()?;
            let (width, height) = terminal::size()?;
            if let Some(input) = translate(&event, Rect::new(0, 0, width, height), board.size()) {
                debug!(?input, "Input received");
                return Ok(input);
            }
        }
    }
}

/// Blocks until any key is pressed.
pub fn wait_for_key() -> Result<(), InputError> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, MouseEvent};

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_cell_at_corners() {
        let inner = Rect::new(10, 5, 30, 9);
        assert_eq!(cell_at(inner, 3, 10, 5), Some((0, 0)));
        assert_eq!(cell_at(inner, 3, 39, 13), Some((2, 2)));
        assert_eq!(cell_at(inner, 3, 25, 9), Some((1, 1)));
        assert_eq!(cell_at(inner, 3, 9, 5), None);
        assert_eq!(cell_at(inner, 3, 40, 5), None);
        assert_eq!(cell_at(inner, 3, 10, 14), None);
    }

    #[test]
    fn test_cell_at_empty_area() {
        assert_eq!(cell_at(Rect::new(0, 0, 0, 0), 3, 0, 0), None);
    }

    #[test]
    fn test_translate_click_inside_board() {
        let screen = Rect::new(0, 0, 80, 24);
        let inner = board_inner(screen);
        let event = click(inner.x, inner.y);
        assert_eq!(translate(&event, screen, 3), Some(InputEvent::Place { row: 0, col: 0 }));
    }

    #[test]
    fn test_translate_click_outside_board() {
        let screen = Rect::new(0, 0, 80, 24);
        assert_eq!(translate(&click(0, 0), screen, 3), None);
    }

    #[test]
    fn test_translate_resize_requests_redraw() {
        let screen = Rect::new(0, 0, 100, 30);
        assert_eq!(
            translate(&Event::Resize(100, 30), screen, 3),
            Some(InputEvent::Resized)
        );
    }

    #[test]
    fn test_translate_quit_keys() {
        let screen = Rect::new(0, 0, 80, 24);
        let q = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        let esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        let plain_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));

        assert_eq!(translate(&q, screen, 3), Some(InputEvent::Quit));
        assert_eq!(translate(&esc, screen, 3), Some(InputEvent::Quit));
        assert_eq!(translate(&ctrl_c, screen, 3), Some(InputEvent::Quit));
        assert_eq!(translate(&plain_c, screen, 3), None);
    }
}
