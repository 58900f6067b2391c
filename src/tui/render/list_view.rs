use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use regex::Regex;

use crate::model::task::Task;
use crate::tui::app::App;
use crate::util::unicode;

use super::{push_edit_spans, push_highlighted_spans};

/// Cells taken by the row prefix: cursor bar + ` [ ] `.
const PREFIX_WIDTH: usize = 6;

/// Render the task list
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.tasks.is_empty() {
        let empty = Paragraph::new(" No tasks yet \u{2014} press a to add one")
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    // Clamp cursor and adjust scroll so the cursor row stays visible
    let visible_height = area.height as usize;
    app.cursor = app.cursor.min(app.tasks.len() - 1);
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if visible_height > 0 && app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor - visible_height + 1;
    }

    let search_re = app.active_search_re();
    let lines: Vec<Line> = app
        .tasks
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
        .map(|(i, task)| {
            render_row(
                app,
                task,
                i == app.cursor,
                area.width as usize,
                search_re.as_ref(),
            )
        })
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

/// Render one task row: cursor bar, state marker, then the title (or the
/// draft buffer while this row is being edited).
fn render_row(
    app: &App,
    task: &Task,
    is_cursor: bool,
    width: usize,
    search_re: Option<&Regex>,
) -> Line<'static> {
    let bg = app.theme.background;
    let mut spans: Vec<Span> = Vec::new();

    // Column 0: left bar marks the cursor row
    if is_cursor {
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    } else {
        spans.push(Span::styled(" ", Style::default().bg(bg)));
    }

    // Marker: tapping equivalent is space/x; done gets the green check
    let (marker, marker_style) = if task.done {
        ("[x]", Style::default().fg(app.theme.green).bg(bg))
    } else {
        ("[ ]", Style::default().fg(app.theme.dim).bg(bg))
    };
    spans.push(Span::styled(format!(" {} ", marker), marker_style));

    let title_style = if task.done {
        Style::default()
            .fg(app.theme.dim)
            .bg(bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else if is_cursor {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };

    let editing = app.edit.as_ref().filter(|e| e.id == task.id);
    if let Some(edit) = editing {
        // Draft replaces the title; the block cursor shows the insert point
        let cursor_style = Style::default()
            .fg(app.theme.background)
            .bg(app.theme.text_bright);
        let draft_style = Style::default().fg(app.theme.text_bright).bg(bg);
        push_edit_spans(&mut spans, &edit.buffer, edit.cursor, draft_style, cursor_style);
    } else {
        let title = unicode::truncate_to_width(&task.title, width.saturating_sub(PREFIX_WIDTH));
        let match_style = Style::default()
            .fg(app.theme.search_match_fg)
            .bg(app.theme.search_match_bg);
        push_highlighted_spans(&mut spans, &title, title_style, match_style, search_re);
    }

    Line::from(spans)
}
