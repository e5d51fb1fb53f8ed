use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::display_width;

/// Render the status row (bottom of screen): mode prompts, transient
/// messages, and key hints
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Navigate => {
            if let Some(ref message) = app.status_message {
                Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(app.theme.accent).bg(bg),
                ))
            } else if let Some(ref pattern) = app.filter {
                with_hint(
                    app,
                    width,
                    vec![Span::styled(
                        format!("/{}", pattern),
                        Style::default().fg(app.theme.dim).bg(bg),
                    )],
                    "Esc clear filter",
                )
            } else if app.show_key_hints {
                let hints = if app.editing {
                    "d delete  m move  e done editing"
                } else {
                    "a add  space toggle  e edit  / filter  ? help  q quit"
                };
                Line::from(Span::styled(
                    hints,
                    Style::default().fg(app.theme.dim).bg(bg),
                ))
            } else {
                Line::from(Span::styled(" ".repeat(width), Style::default().bg(bg)))
            }
        }
        Mode::Add => prompt_line(app, width, "add: ", "Enter add  Esc cancel"),
        Mode::Filter => prompt_line(app, width, "/", "Enter filter  Esc cancel"),
        Mode::Move => with_hint(
            app,
            width,
            vec![Span::styled(
                "move: j/k to reorder",
                Style::default().fg(app.theme.accent).bg(bg),
            )],
            "Enter confirm  Esc put back",
        ),
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Prompt with the input buffer and a block cursor: `add: Buy milk▌`
fn prompt_line<'a>(app: &'a App, width: usize, label: &'a str, hint: &'a str) -> Line<'a> {
    let bg = app.theme.background;
    let spans = vec![
        Span::styled(label, Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(
            &app.input[..app.input_cursor],
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
        Span::styled("\u{258C}", Style::default().fg(app.theme.accent).bg(bg)),
        Span::styled(
            &app.input[app.input_cursor..],
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
    ];
    with_hint(app, width, spans, hint)
}

/// Right-align a dim hint after the given spans, padding with background
fn with_hint<'a>(app: &App, width: usize, mut spans: Vec<Span<'a>>, hint: &'a str) -> Line<'a> {
    let bg = app.theme.background;
    let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let hint_width = display_width(hint);
    if app.show_key_hints && content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
    Line::from(spans)
}
