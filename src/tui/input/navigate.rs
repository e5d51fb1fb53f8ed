use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode, MoveState};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Any keypress clears a transient status message
    app.status_message = None;

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => {
            let len = app.visible_indices().len();
            if len > 0 && app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => app.cursor = 0,
        KeyCode::Char('G') => {
            let len = app.visible_indices().len();
            app.cursor = len.saturating_sub(1);
        }
        KeyCode::Char(' ') | KeyCode::Enter => toggle_current(app),
        KeyCode::Char('a') => open_add_prompt(app),
        KeyCode::Char('e') => toggle_editing(app),
        KeyCode::Char('d') => delete_current(app),
        KeyCode::Char('m') => enter_move_mode(app),
        KeyCode::Char('/') => open_filter_prompt(app),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Esc => {
            if app.filter.is_some() {
                app.filter = None;
                app.clamp_cursor();
            }
        }
        _ => {}
    }
}

fn toggle_current(app: &mut App) {
    let Some(index) = app.cursor_store_index() else {
        return;
    };
    super::with_store_lock(app, |app| {
        if let Err(e) = app.store.toggle(index) {
            app.report_error(e);
        }
    });
}

fn open_add_prompt(app: &mut App) {
    app.input.clear();
    app.input_cursor = 0;
    app.mode = Mode::Add;
}

fn open_filter_prompt(app: &mut App) {
    app.input = app.filter.clone().unwrap_or_default();
    app.input_cursor = app.input.len();
    app.mode = Mode::Filter;
}

/// Toggle editing mode. Pointless on an empty list, so ignored there.
fn toggle_editing(app: &mut App) {
    if app.store.is_empty() {
        return;
    }
    app.editing = !app.editing;
}

/// Delete the task under the cursor (editing mode only). When the last task
/// goes, the store's Emptied event drops us out of editing mode.
fn delete_current(app: &mut App) {
    if !app.editing {
        return;
    }
    let Some(index) = app.cursor_store_index() else {
        return;
    };
    super::with_store_lock(app, |app| {
        if let Err(e) = app.store.remove(index) {
            app.report_error(e);
        }
    });
    app.clamp_cursor();
}

/// Pick up the task under the cursor for reordering (editing mode only).
/// Reordering a filtered view would move tasks across hidden neighbors, so
/// the filter must be cleared first.
fn enter_move_mode(app: &mut App) {
    if !app.editing {
        return;
    }
    if app.filter.is_some() {
        app.status_message = Some("clear the filter before moving tasks (Esc)".to_string());
        return;
    }
    if app.store.len() < 2 {
        return;
    }
    let Some(index) = app.cursor_store_index() else {
        return;
    };
    app.move_state = Some(MoveState {
        original_index: index,
    });
    app.mode = Mode::Move;
}
