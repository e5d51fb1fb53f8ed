use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const KEYS: &[(&str, &str)] = &[
    ("j/k, arrows", "move the cursor"),
    ("g / G", "jump to top / bottom"),
    ("space, Enter", "toggle done"),
    ("a", "add a task"),
    ("e", "toggle editing mode"),
    ("d", "delete (editing mode)"),
    ("m", "move task (editing mode)"),
    ("/", "filter by title"),
    ("Esc", "clear filter / cancel"),
    ("?", "this help"),
    ("q", "quit"),
];

/// Render the help overlay centered over the given area
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let width = 44.min(area.width);
    let height = (KEYS.len() as u16 + 2).min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let lines: Vec<Line> = KEYS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<14}", key),
                    Style::default()
                        .fg(app.theme.text_bright)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(app.theme.text)),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" keys ")
        .style(
            Style::default()
                .bg(app.theme.background)
                .fg(app.theme.dim),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn overlay_lists_every_binding() {
        let app = app_with_tasks(&[]);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_help_overlay(frame, &app, area);
        });
        for (key, _) in KEYS {
            assert!(output.contains(key), "missing binding: {}", key);
        }
    }
}
