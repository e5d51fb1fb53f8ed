use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

/// Single-line text input shared by the add and filter prompts.
pub(super) fn handle_prompt(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => cancel(app),
        KeyCode::Enter => submit(app),
        KeyCode::Left => {
            if let Some(b) = prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = b;
            }
        }
        KeyCode::Right => {
            if let Some(b) = next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input_cursor = b;
            }
        }
        KeyCode::Home => app.input_cursor = 0,
        KeyCode::End => app.input_cursor = app.input.len(),
        KeyCode::Backspace => {
            if let Some(b) = prev_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.replace_range(b..app.input_cursor, "");
                app.input_cursor = b;
            }
        }
        KeyCode::Delete => {
            if let Some(b) = next_grapheme_boundary(&app.input, app.input_cursor) {
                app.input.replace_range(app.input_cursor..b, "");
            }
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(KeyModifiers::ALT)
            {
                return;
            }
            app.input.insert(app.input_cursor, c);
            app.input_cursor += c.len_utf8();
        }
        _ => {}
    }
}

fn cancel(app: &mut App) {
    // Dismissing the prompt performs no mutation; an applied filter survives
    // a cancelled re-edit.
    app.input.clear();
    app.input_cursor = 0;
    app.mode = Mode::Navigate;
}

fn submit(app: &mut App) {
    let text = std::mem::take(&mut app.input);
    app.input_cursor = 0;
    let mode = app.mode;
    app.mode = Mode::Navigate;

    match mode {
        Mode::Add => {
            // Submitting an empty title just closes the prompt
            super::with_store_lock(app, |app| match app.store.add(&text) {
                Ok(true) => {
                    // Put the cursor on the new task if the filter shows it
                    let new_index = app.store.len() - 1;
                    if let Some(pos) = app
                        .visible_indices()
                        .iter()
                        .position(|&i| i == new_index)
                    {
                        app.cursor = pos;
                    }
                }
                Ok(false) => {}
                Err(e) => app.report_error(e),
            });
        }
        Mode::Filter => {
            app.filter = if text.is_empty() { None } else { Some(text) };
            app.cursor = 0;
            app.scroll_offset = 0;
        }
        _ => {}
    }
}
