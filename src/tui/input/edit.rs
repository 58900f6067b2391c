use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

use super::*;

/// Inline row edit. Enter commits the draft, Esc discards it. Toggling done
/// is allowed without leaving the draft (Ctrl-T), matching the rule that
/// edit state never blocks a toggle.
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => app.commit_edit(),
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Char('t') if ctrl => {
            if let Some(id) = app.edit.as_ref().map(|e| e.id) {
                app.toggle(id);
            }
        }
        _ => {
            if let Some(edit) = app.edit.as_mut() {
                edit_buffer_key(&mut edit.buffer, &mut edit.cursor, key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::handle_key;
    use crate::model::config::Config;
    use crate::ops::task_ops;
    use crate::tui::app::Mode;

    fn app_with(titles: &[&str]) -> App {
        let mut app = App::new(&Config::default());
        for (i, title) in titles.iter().enumerate() {
            app.tasks = task_ops::add_task(&app.tasks, title, (i + 1) as i64).unwrap();
        }
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn ctrl_t_toggles_without_leaving_edit() {
        let mut app = app_with(&["Buy milk"]);
        let id = app.cursor_task_id().unwrap();
        app.start_edit();

        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL),
        );
        assert_eq!(app.mode, Mode::Edit);
        assert!(app.tasks.find(id).unwrap().done);

        // the draft is still alive and commits normally
        press(&mut app, KeyCode::Char('!'));
        press(&mut app, KeyCode::Enter);
        let task = app.tasks.find(id).unwrap();
        assert_eq!(task.title, "Buy milk!");
        assert!(task.done);
    }

    #[test]
    fn blank_draft_commit_keeps_old_title() {
        let mut app = app_with(&["Buy milk"]);
        let id = app.cursor_task_id().unwrap();
        app.start_edit();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        );
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.tasks.find(id).unwrap().title, "Buy milk");
        assert_eq!(app.mode, Mode::Navigate);
    }
}
