use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::unicode;

/// Apply a key event to a single-line edit buffer. `cursor` is a byte
/// offset, kept on a grapheme boundary. Returns true if the key was
/// consumed.
pub(super) fn edit_buffer_key(buffer: &mut String, cursor: &mut usize, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char(c) if !ctrl => {
            buffer.insert(*cursor, c);
            *cursor += c.len_utf8();
            true
        }
        KeyCode::Backspace => {
            if let Some(prev) = unicode::prev_grapheme_boundary(buffer, *cursor) {
                buffer.drain(prev..*cursor);
                *cursor = prev;
            }
            true
        }
        KeyCode::Delete => {
            if let Some(next) = unicode::next_grapheme_boundary(buffer, *cursor) {
                buffer.drain(*cursor..next);
            }
            true
        }
        KeyCode::Left if ctrl => {
            *cursor = unicode::word_boundary_left(buffer, *cursor);
            true
        }
        KeyCode::Right if ctrl => {
            *cursor = unicode::word_boundary_right(buffer, *cursor);
            true
        }
        KeyCode::Left => {
            if let Some(prev) = unicode::prev_grapheme_boundary(buffer, *cursor) {
                *cursor = prev;
            }
            true
        }
        KeyCode::Right => {
            if let Some(next) = unicode::next_grapheme_boundary(buffer, *cursor) {
                *cursor = next;
            }
            true
        }
        KeyCode::Home => {
            *cursor = 0;
            true
        }
        KeyCode::End => {
            *cursor = buffer.len();
            true
        }
        // Delete word left
        KeyCode::Char('w') if ctrl => {
            let start = unicode::word_boundary_left(buffer, *cursor);
            buffer.drain(start..*cursor);
            *cursor = start;
            true
        }
        // Clear to start
        KeyCode::Char('u') if ctrl => {
            buffer.drain(..*cursor);
            *cursor = 0;
            true
        }
        _ => false,
    }
}
