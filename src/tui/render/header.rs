use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the header: app name on the left, live task counter on the right,
/// separator rule below.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title + counter
            Constraint::Length(1), // separator
        ])
        .split(area);

    render_title_row(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1]);
}

fn render_title_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            "\u{25CF}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ),
        Span::styled(
            " jot",
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    // Counter, right-aligned: "3 tasks · 1 done"
    let total = app.tasks.len();
    let done = app.tasks.done_count();
    let mut counter = format!("{} task{}", total, if total == 1 { "" } else { "s" });
    if done > 0 {
        counter.push_str(&format!(" \u{B7} {} done", done));
    }
    counter.push(' ');

    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let counter_width = counter.chars().count();
    if content_width + counter_width < width {
        spans.push(Span::styled(
            " ".repeat(width - content_width - counter_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            counter,
            Style::default().fg(app.theme.text).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect) {
    let line = "\u{2500}".repeat(area.width as usize);
    let paragraph = Paragraph::new(line)
        .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{app_with_tasks, draw_app, empty_app};
    use pretty_assertions::assert_eq;

    #[test]
    fn counter_tracks_collection() {
        let mut app = app_with_tasks(&["Buy milk", "Walk the dog"]);
        let screen = draw_app(&mut app);
        let first = screen.lines().next().unwrap();
        assert!(first.contains("jot"), "{screen}");
        assert!(first.contains("2 tasks"), "{screen}");
        assert!(!first.contains("done"), "{screen}");

        let id = app.tasks.get(0).unwrap().id;
        app.toggle(id);
        let screen = draw_app(&mut app);
        let first = screen.lines().next().unwrap();
        assert!(first.contains("2 tasks \u{B7} 1 done"), "{screen}");
    }

    #[test]
    fn singular_task_count() {
        let mut app = app_with_tasks(&["Buy milk"]);
        let screen = draw_app(&mut app);
        assert!(screen.lines().next().unwrap().contains("1 task"));

        let mut app = empty_app();
        let screen = draw_app(&mut app);
        assert!(screen.lines().next().unwrap().contains("0 tasks"));
    }

    #[test]
    fn separator_spans_width() {
        let mut app = empty_app();
        let screen = draw_app(&mut app);
        let sep = screen.lines().nth(1).unwrap();
        assert_eq!(sep.chars().filter(|&c| c == '\u{2500}').count(), 60);
    }
}
