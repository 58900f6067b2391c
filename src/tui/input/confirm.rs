use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

use super::*;

/// The remove popup: two choices, No and Yes. Every other key is swallowed.
pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => app.resolve_confirm(true),
        KeyCode::Char('n') | KeyCode::Esc => app.resolve_confirm(false),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::handle_key;
    use crate::model::config::Config;
    use crate::ops::task_ops;
    use crate::tui::app::Mode;
    use crossterm::event::KeyModifiers;

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
    fn yes_removes_no_keeps() {
        let mut app = app_with(&["Buy milk", "Walk the dog"]);
        let before = app.tasks.clone();

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.mode, Mode::Confirm);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.tasks, before);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.tasks.len(), 1);
    }

    #[test]
    fn stray_keys_are_swallowed() {
        let mut app = app_with(&["Buy milk"]);
        press(&mut app, KeyCode::Char('d'));
        let before = app.tasks.clone();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.mode, Mode::Confirm);
        assert_eq!(app.tasks, before);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.tasks, before);
    }
}
