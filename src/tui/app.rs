use std::io;
use std::path::Path;
use std::time::Duration;

use chrono::Utc;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use regex::Regex;

use crate::io::config_io::load_config;
use crate::model::config::Config;
use crate::model::task::{TaskId, TaskList};
use crate::ops::task_ops::{self, TaskError};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Add field focused
    Insert,
    /// A row's title is being edited inline
    Edit,
    Search,
    /// A destructive intent is waiting on the yes/no popup
    Confirm,
}

/// Transient state for the row being edited. Lives here, never in the task
/// list: a cancelled draft must leave the collection untouched.
#[derive(Debug, Clone)]
pub struct EditState {
    pub id: TaskId,
    /// Draft title
    pub buffer: String,
    /// Byte offset into `buffer`, always on a grapheme boundary
    pub cursor: usize,
}

/// A destructive intent parked until the user answers the confirm popup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    RemoveTask { id: TaskId },
}

/// Main application state
pub struct App {
    pub tasks: TaskList,
    pub mode: Mode,
    /// Cursor index into the task list
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    /// Add-field buffer (kept across mode switches so a half-typed title
    /// isn't lost by stepping out)
    pub input: String,
    pub input_cursor: usize,
    /// Row edit state; present only while a row is being edited
    pub edit: Option<EditState>,
    pub confirm: Option<ConfirmAction>,
    /// Blocking alert text (duplicate-title warning); intercepts all input
    pub alert: Option<String>,
    pub status_message: Option<String>,
    /// Search mode: current query being typed
    pub search_input: String,
    /// Last executed search pattern
    pub last_search: Option<String>,
    pub show_help: bool,
    pub show_key_hints: bool,
    pub should_quit: bool,
    pub theme: Theme,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            tasks: TaskList::new(),
            mode: Mode::Navigate,
            cursor: 0,
            scroll_offset: 0,
            input: String::new(),
            input_cursor: 0,
            edit: None,
            confirm: None,
            alert: None,
            status_message: None,
            search_input: String::new(),
            last_search: None,
            show_help: false,
            show_key_hints: config.ui.show_key_hints,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
        }
    }

    /// Task id under the cursor.
    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.tasks.get(self.cursor).map(|t| t.id)
    }

    /// Clamp cursor after the collection shrank.
    pub fn clamp_cursor(&mut self) {
        if self.tasks.is_empty() {
            self.cursor = 0;
            self.scroll_offset = 0;
        } else {
            self.cursor = self.cursor.min(self.tasks.len() - 1);
        }
    }

    /// Submit the add field: append a task, or raise the duplicate alert.
    pub fn submit_add(&mut self) {
        self.submit_add_at(Utc::now().timestamp_millis());
    }

    /// Like [`App::submit_add`] with an explicit timestamp (tests pin the clock).
    pub fn submit_add_at(&mut self, now_ms: i64) {
        match task_ops::add_task(&self.tasks, &self.input, now_ms) {
            Ok(tasks) => {
                self.tasks = tasks;
                self.input.clear();
                self.input_cursor = 0;
                self.cursor = self.tasks.len() - 1;
            }
            // An empty submit is a silent no-op
            Err(TaskError::EmptyTitle) => {}
            Err(TaskError::DuplicateTitle(title)) => {
                self.alert = Some(format!("You can't add a task named \"{title}\" twice."));
            }
        }
    }

    /// Toggle done for a task by id.
    pub fn toggle(&mut self, id: TaskId) {
        self.tasks = task_ops::toggle_task(&self.tasks, id);
    }

    /// Begin editing the row under the cursor; the draft starts as the
    /// current title with the cursor at the end.
    pub fn start_edit(&mut self) {
        if let Some(task) = self.tasks.get(self.cursor) {
            self.edit = Some(EditState {
                id: task.id,
                buffer: task.title.clone(),
                cursor: task.title.len(),
            });
            self.mode = Mode::Edit;
        }
    }

    /// Commit the draft title and leave edit mode. A blank draft keeps the
    /// old title (rename_task treats it as a no-op).
    pub fn commit_edit(&mut self) {
        if let Some(edit) = self.edit.take() {
            self.tasks = task_ops::rename_task(&self.tasks, edit.id, &edit.buffer);
        }
        self.mode = Mode::Navigate;
    }

    /// Discard the draft and leave edit mode; the task is untouched.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
        self.mode = Mode::Navigate;
    }

    /// Park a remove intent until the confirm popup is answered.
    pub fn request_remove(&mut self, id: TaskId) {
        self.confirm = Some(ConfirmAction::RemoveTask { id });
        self.mode = Mode::Confirm;
    }

    /// Answer the pending confirm action. "No" is a true no-op.
    pub fn resolve_confirm(&mut self, yes: bool) {
        let action = self.confirm.take();
        self.mode = Mode::Navigate;
        if !yes {
            return;
        }
        if let Some(ConfirmAction::RemoveTask { id }) = action {
            self.tasks = task_ops::remove_task(&self.tasks, id);
            self.clamp_cursor();
        }
    }

    /// Get the active search regex for highlighting.
    /// In Search mode: compiles from current input. Otherwise: from last_search.
    pub fn active_search_re(&self) -> Option<Regex> {
        let pattern = match self.mode {
            Mode::Search => {
                if self.search_input.is_empty() {
                    return None;
                }
                &self.search_input
            }
            _ => self.last_search.as_deref()?,
        };
        Regex::new(&format!("(?i){}", pattern))
            .or_else(|_| Regex::new(&format!("(?i){}", regex::escape(pattern))))
            .ok()
    }
}

/// Run the TUI application
pub fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(titles: &[&str]) -> App {
        let mut app = App::new(&Config::default());
        for (i, title) in titles.iter().enumerate() {
            app.tasks = task_ops::add_task(&app.tasks, title, (i + 1) as i64).unwrap();
        }
        app
    }

    #[test]
    fn submit_add_appends_and_clears_input() {
        let mut app = App::new(&Config::default());
        app.input = "Buy milk".into();
        app.input_cursor = app.input.len();
        app.submit_add_at(1_000);

        assert_eq!(app.tasks.len(), 1);
        assert!(app.input.is_empty());
        assert_eq!(app.input_cursor, 0);
        assert_eq!(app.cursor, 0);
        assert!(app.alert.is_none());
    }

    #[test]
    fn submit_add_duplicate_raises_alert_and_keeps_input() {
        let mut app = app_with(&["Buy milk"]);
        app.input = "Buy milk".into();
        let before = app.tasks.clone();
        app.submit_add_at(9_000);

        assert_eq!(app.tasks, before);
        assert!(app.alert.as_deref().unwrap().contains("Buy milk"));
        assert_eq!(app.input, "Buy milk");
    }

    #[test]
    fn submit_add_empty_is_silent_noop() {
        let mut app = App::new(&Config::default());
        app.input = "   ".into();
        app.submit_add_at(1_000);
        assert!(app.tasks.is_empty());
        assert!(app.alert.is_none());
    }

    #[test]
    fn edit_cycle_commit_and_cancel() {
        let mut app = app_with(&["Buy milk"]);
        let id = app.cursor_task_id().unwrap();

        app.start_edit();
        assert_eq!(app.mode, Mode::Edit);
        let edit = app.edit.as_mut().unwrap();
        assert_eq!(edit.buffer, "Buy milk");
        edit.buffer = "Buy oat milk".into();
        app.commit_edit();
        assert_eq!(app.tasks.find(id).unwrap().title, "Buy oat milk");
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.edit.is_none());

        app.start_edit();
        app.edit.as_mut().unwrap().buffer = "discarded".into();
        app.cancel_edit();
        assert_eq!(app.tasks.find(id).unwrap().title, "Buy oat milk");
    }

    #[test]
    fn confirm_no_is_a_true_noop() {
        let mut app = app_with(&["Buy milk", "Walk the dog"]);
        let id = app.cursor_task_id().unwrap();
        let before = app.tasks.clone();

        app.request_remove(id);
        assert_eq!(app.mode, Mode::Confirm);
        app.resolve_confirm(false);

        assert_eq!(app.tasks, before);
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.confirm.is_none());
    }

    #[test]
    fn confirm_yes_removes_and_clamps_cursor() {
        let mut app = app_with(&["Buy milk", "Walk the dog"]);
        app.cursor = 1;
        let id = app.cursor_task_id().unwrap();

        app.request_remove(id);
        app.resolve_confirm(true);

        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks.find(id), None);
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn search_re_falls_back_to_literal() {
        let mut app = app_with(&["a[b"]);
        app.last_search = Some("a[b".into());
        let re = app.active_search_re().unwrap();
        assert!(re.is_match("xa[bx"));
    }
}
