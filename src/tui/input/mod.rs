mod move_mode;
mod navigate;
mod prompt;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Help overlay intercepts all input
    if app.show_help {
        if matches!(
            key.code,
            KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc
        ) {
            app.show_help = false;
        }
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::Add | Mode::Filter => prompt::handle_prompt(app, key),
        Mode::Move => move_mode::handle_move(app, key),
    }
}

/// Run a store mutation under the advisory write lock, so a concurrent `tk`
/// invocation cannot interleave its write with ours. On lock failure the
/// mutation is skipped and the error lands in the status row.
fn with_store_lock(app: &mut App, mutate: impl FnOnce(&mut App)) {
    match app.lock_store() {
        Ok(_guard) => mutate(app),
        Err(e) => app.report_error(e),
    }
}
