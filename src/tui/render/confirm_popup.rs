use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, ConfirmAction};
use crate::util::unicode;

/// Render the remove confirmation popup: the task title and a No/Yes choice.
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ConfirmAction::RemoveTask { id }) = &app.confirm else {
        return;
    };
    let title = app
        .tasks
        .find(*id)
        .map(|t| t.title.as_str())
        .unwrap_or("");

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let bright_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(app.theme.dim).bg(bg);

    let popup_w: u16 = 44.min(area.width.saturating_sub(2));
    let title = unicode::truncate_to_width(title, (popup_w as usize).saturating_sub(8));

    let lines: Vec<Line> = vec![
        Line::from(Span::styled(" Remove item", header_style)),
        Line::from(Span::styled("", text_style)),
        Line::from(vec![
            Span::styled("  Remove \"", text_style),
            Span::styled(title, bright_style),
            Span::styled("\"?", text_style),
        ]),
        Line::from(Span::styled("", text_style)),
        Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("n", key_style),
            Span::styled(" No   ", text_style),
            Span::styled("y", key_style),
            Span::styled(" Yes", text_style),
        ]),
    ];

    render_popup(frame, app, area, popup_w, lines);
}

/// Render the blocking alert popup (duplicate-title warning).
pub fn render_alert_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(text) = &app.alert else {
        return;
    };

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.red)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let key_style = Style::default().fg(app.theme.dim).bg(bg);

    let popup_w: u16 = ((text.chars().count() + 6) as u16)
        .max(24)
        .min(area.width.saturating_sub(2));
    let text = unicode::truncate_to_width(text, (popup_w as usize).saturating_sub(4));

    let lines: Vec<Line> = vec![
        Line::from(Span::styled(" Cannot add", header_style)),
        Line::from(Span::styled("", text_style)),
        Line::from(Span::styled(format!("  {}", text), text_style)),
        Line::from(Span::styled("", text_style)),
        Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("Esc", key_style),
            Span::styled(" dismiss", text_style),
        ]),
    ];

    render_popup(frame, app, area, popup_w, lines);
}

fn render_popup(frame: &mut Frame, app: &App, area: Rect, width: u16, lines: Vec<Line>) {
    let bg = app.theme.background;
    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(width, popup_h, area);

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::{app_with_tasks, draw_app};

    #[test]
    fn confirm_popup_names_the_task() {
        let mut app = app_with_tasks(&["Buy milk", "Walk the dog"]);
        let id = app.tasks.get(1).unwrap().id;
        app.request_remove(id);

        let screen = draw_app(&mut app);
        assert!(screen.contains("Remove item"), "{screen}");
        assert!(screen.contains("Walk the dog"), "{screen}");
        assert!(screen.contains("No"), "{screen}");
        assert!(screen.contains("Yes"), "{screen}");
    }

    #[test]
    fn alert_popup_shows_warning() {
        let mut app = app_with_tasks(&["Buy milk"]);
        app.alert = Some("You can't add a task named \"Buy milk\" twice.".into());

        let screen = draw_app(&mut app);
        assert!(screen.contains("Cannot add"), "{screen}");
        assert!(screen.contains("twice"), "{screen}");
        assert!(screen.contains("Esc dismiss"), "{screen}");
    }
}
