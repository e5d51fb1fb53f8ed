use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::{display_width, truncate_to_width};

/// Render the task list: one row per visible task, checkbox + title
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let visible = app.visible_indices();

    if visible.is_empty() {
        let message = if app.filter.is_some() || app.mode == Mode::Filter {
            " no matching tasks"
        } else {
            " no tasks — press a to add one"
        };
        let empty = Paragraph::new(message)
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    // Keep the cursor in view
    let height = area.height as usize;
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if height > 0 && app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }

    let width = area.width as usize;
    let mut lines: Vec<Line> = Vec::new();

    for (row, &index) in visible
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
    {
        let task = &app.store.tasks()[index];
        let is_cursor = row == app.cursor;
        let is_held = is_cursor && app.mode == Mode::Move;

        let bg = if is_cursor {
            app.theme.highlight
        } else {
            app.theme.background
        };

        let checkbox_style = if task.done {
            Style::default().fg(app.theme.done).bg(bg)
        } else if is_held {
            Style::default().fg(app.theme.accent).bg(bg)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };

        let mut title_style = if task.done {
            Style::default()
                .fg(app.theme.dim)
                .bg(bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if is_cursor {
            Style::default().fg(app.theme.text_bright).bg(bg)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };
        if is_held {
            title_style = title_style.add_modifier(Modifier::BOLD);
        }

        let checkbox = format!(" [{}] ", task.marker());
        let title_budget = width.saturating_sub(display_width(&checkbox));
        let title = truncate_to_width(&task.title, title_budget);

        let mut spans = vec![
            Span::styled(checkbox, checkbox_style),
            Span::styled(title, title_style),
        ];

        // Pad the cursor row to full width so the highlight spans the line
        if is_cursor {
            let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
            if content_width < width {
                spans.push(Span::styled(
                    " ".repeat(width - content_width),
                    Style::default().bg(bg),
                ));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}
