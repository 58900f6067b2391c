use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

use super::*;

pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.last_search = if app.search_input.is_empty() {
                None
            } else {
                Some(app.search_input.clone())
            };
            app.mode = Mode::Navigate;
            // Land on a matching row if the cursor isn't on one already
            if let Some(re) = app.active_search_re()
                && !app
                    .tasks
                    .get(app.cursor)
                    .is_some_and(|t| re.is_match(&t.title))
            {
                next_match(app, 1);
            }
        }
        KeyCode::Esc => {
            app.search_input.clear();
            app.mode = Mode::Navigate;
        }
        KeyCode::Backspace => {
            app.search_input.pop();
        }
        KeyCode::Char(c) => app.search_input.push(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::input::handle_key;
    use crate::model::config::Config;
    use crate::ops::task_ops;
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
    fn enter_stores_pattern_and_jumps_to_match() {
        let mut app = app_with(&["Buy milk", "Walk the dog", "Write report"]);
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.mode, Mode::Search);
        for c in "dog".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.last_search.as_deref(), Some("dog"));
        assert_eq!(app.cursor, 1);
    }

    #[test]
    fn esc_discards_pattern() {
        let mut app = app_with(&["Buy milk"]);
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.search_input.is_empty());
        assert_eq!(app.last_search, None);
    }

    #[test]
    fn empty_enter_clears_last_search() {
        let mut app = app_with(&["Buy milk"]);
        app.last_search = Some("milk".into());
        press(&mut app, KeyCode::Char('/'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.last_search, None);
    }
}
