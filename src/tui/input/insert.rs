use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

use super::*;

/// Add field. Enter submits and keeps the field focused for rapid entry;
/// Esc steps back to the list with the buffer intact.
pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_add(),
        KeyCode::Esc => app.mode = Mode::Navigate,
        _ => {
            edit_buffer_key(&mut app.input, &mut app.input_cursor, key);
        }
    }
}
