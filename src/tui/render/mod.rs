pub mod confirm_popup;
pub mod header;
pub mod help_overlay;
pub mod input_row;
pub mod list_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use regex::Regex;

use crate::util::unicode;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | add input | task list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // header + separator
            Constraint::Length(1), // add input
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    input_row::render_input_row(frame, app, chunks[1]);
    list_view::render_list(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Overlays (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
    if app.confirm.is_some() {
        confirm_popup::render_confirm_popup(frame, app, frame.area());
    }
    if app.alert.is_some() {
        confirm_popup::render_alert_popup(frame, app, frame.area());
    }
}

/// Push spans for text with regex match highlighting. If no regex or no
/// matches, pushes a single span with `base_style`. Otherwise splits text at
/// match boundaries.
pub(super) fn push_highlighted_spans(
    spans: &mut Vec<Span<'static>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) {
    let re = match search_re {
        Some(r) => r,
        None => {
            spans.push(Span::styled(text.to_string(), base_style));
            return;
        }
    };

    let mut last_end = 0;
    let mut has_match = false;
    for m in re.find_iter(text) {
        has_match = true;
        if m.start() > last_end {
            spans.push(Span::styled(
                text[last_end..m.start()].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(
            text[m.start()..m.end()].to_string(),
            highlight_style,
        ));
        last_end = m.end();
    }
    if !has_match {
        spans.push(Span::styled(text.to_string(), base_style));
    } else if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}

/// Push spans for an edit buffer with a block cursor. The cursor sits on a
/// grapheme boundary; the cluster under it is rendered in `cursor_style`
/// (a trailing space when the cursor is at the end).
pub(super) fn push_edit_spans(
    spans: &mut Vec<Span<'static>>,
    buffer: &str,
    cursor: usize,
    base_style: Style,
    cursor_style: Style,
) {
    let cursor = cursor.min(buffer.len());
    let before = &buffer[..cursor];
    if !before.is_empty() {
        spans.push(Span::styled(before.to_string(), base_style));
    }
    let cluster = unicode::grapheme_at(buffer, cursor);
    if cluster.is_empty() {
        spans.push(Span::styled(" ".to_string(), cursor_style));
    } else {
        spans.push(Span::styled(cluster.to_string(), cursor_style));
        let after = &buffer[cursor + cluster.len()..];
        if !after.is_empty() {
            spans.push(Span::styled(after.to_string(), base_style));
        }
    }
}
