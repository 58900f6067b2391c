use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Search => {
            // Search prompt: /pattern▌
            let spans = vec![
                Span::styled(
                    format!("/{}", app.search_input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
            ];
            with_hint(app, spans, "Enter search  Esc cancel", width)
        }
        Mode::Insert => with_hint(app, Vec::new(), "Enter add  Esc back", width),
        Mode::Edit => with_hint(
            app,
            Vec::new(),
            "Enter save  Esc cancel  C-t toggle done",
            width,
        ),
        // The popup carries its own hints
        Mode::Confirm => Line::from(Span::styled(
            " ".repeat(width),
            Style::default().bg(bg),
        )),
        Mode::Navigate => {
            if let Some(ref message) = app.status_message {
                Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(app.theme.text).bg(bg),
                ))
            } else if let Some(ref pattern) = app.last_search {
                let spans = vec![Span::styled(
                    format!("/{}", pattern),
                    Style::default().fg(app.theme.dim).bg(bg),
                )];
                with_hint(app, spans, "n/N next/prev", width)
            } else if app.show_key_hints {
                Line::from(Span::styled(
                    " a add  space toggle  e edit  d remove  / search  ? help",
                    Style::default().fg(app.theme.dim).bg(bg),
                ))
            } else {
                Line::from(Span::styled(" ".repeat(width), Style::default().bg(bg)))
            }
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Append a right-aligned dim hint to the given spans.
fn with_hint(app: &App, mut spans: Vec<Span<'static>>, hint: &str, width: usize) -> Line<'static> {
    let bg = app.theme.background;
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(
            " ".repeat(padding),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            hint.to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
    Line::from(spans)
}
