use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

use super::push_edit_spans;

/// Render the add field: `›` prompt plus the buffer. Shows a placeholder
/// while empty and a block cursor while focused.
pub fn render_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let active = app.mode == Mode::Insert;

    let prompt_style = if active {
        Style::default().fg(app.theme.highlight).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    let mut spans: Vec<Span> = vec![Span::styled(" \u{203A} ".to_string(), prompt_style)];

    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let cursor_style = Style::default()
        .fg(app.theme.background)
        .bg(app.theme.text_bright);

    if active {
        push_edit_spans(
            &mut spans,
            &app.input,
            app.input_cursor,
            text_style,
            cursor_style,
        );
    } else if app.input.is_empty() {
        spans.push(Span::styled(
            "add a task\u{2026}".to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        // A half-typed title left behind by Esc stays visible
        spans.push(Span::styled(app.input.clone(), text_style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
