use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

/// Move mode: the task under the cursor is "held"; j/k carry it up and down
/// the list, Enter (or m) drops it where it is, Esc puts it back where it
/// started. Every step goes through the store, so each intermediate position
/// is persisted — the writes are idempotent full replaces, so the only cost
/// of stepping is a rewrite.
pub(super) fn handle_move(app: &mut App, key: KeyEvent) {
    let Some(move_state) = app.move_state else {
        app.mode = Mode::Navigate;
        return;
    };

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => step(app, 1),
        KeyCode::Char('k') | KeyCode::Up => step(app, -1),
        // Drop the task here
        KeyCode::Enter | KeyCode::Char('m') => {
            app.move_state = None;
            app.mode = Mode::Navigate;
        }
        // Put it back
        KeyCode::Esc => {
            let current = app.cursor;
            let original = move_state.original_index;
            if current != original {
                super::with_store_lock(app, |app| {
                    if let Err(e) = app.store.reorder(current, original) {
                        app.report_error(e);
                    }
                });
            }
            app.cursor = original;
            app.move_state = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}

fn step(app: &mut App, delta: isize) {
    let len = app.store.len();
    let from = app.cursor;
    let to = from as isize + delta;
    if to < 0 || to as usize >= len {
        return;
    }
    let to = to as usize;
    let mut moved = false;
    super::with_store_lock(app, |app| match app.store.reorder(from, to) {
        Ok(()) => moved = true,
        Err(e) => app.report_error(e),
    });
    if moved {
        app.cursor = to;
    }
}
