use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

use super::*;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts all keys until closed
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('g') => app.cursor = 0,
        KeyCode::Char('G') => app.cursor = app.tasks.len().saturating_sub(1),
        KeyCode::Char('a') => app.mode = Mode::Insert,
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.cursor_task_id() {
                app.toggle(id);
            }
        }
        KeyCode::Char('e') | KeyCode::Enter => app.start_edit(),
        KeyCode::Char('d') => {
            if let Some(id) = app.cursor_task_id() {
                app.request_remove(id);
            }
        }
        KeyCode::Char('/') => {
            app.search_input.clear();
            app.mode = Mode::Search;
        }
        KeyCode::Char('n') => next_match(app, 1),
        KeyCode::Char('N') => next_match(app, -1),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

pub(super) fn move_cursor(app: &mut App, delta: i64) {
    let len = app.tasks.len();
    if len == 0 {
        return;
    }
    let cursor = app.cursor as i64 + delta;
    app.cursor = cursor.clamp(0, len as i64 - 1) as usize;
}

/// Move the cursor to the next/previous row matching the active search,
/// wrapping around the list.
pub(super) fn next_match(app: &mut App, dir: i64) {
    let re = match app.active_search_re() {
        Some(re) => re,
        None => return,
    };
    let len = app.tasks.len();
    if len == 0 {
        return;
    }
    for step in 1..=len {
        let idx = (app.cursor as i64 + dir * step as i64).rem_euclid(len as i64) as usize;
        if app.tasks.get(idx).is_some_and(|t| re.is_match(&t.title)) {
            app.cursor = idx;
            return;
        }
    }
    if let Some(pattern) = &app.last_search {
        app.status_message = Some(format!("no match: {}", pattern));
    }
}
