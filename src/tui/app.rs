use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use regex::Regex;

use crate::io::config_io;
use crate::io::lock::{FileLock, LockError};
use crate::io::watcher::StoreWatcher;
use crate::model::Config;
use crate::store::{StoreEvent, TaskStore};

use super::input;
use super::render;
use super::theme::Theme;

/// How long a mutation waits on the store lock before giving up. Short —
/// a concurrent writer only holds it for one read-modify-write.
const LOCK_WAIT: Duration = Duration::from_millis(500);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Add prompt open (the "what do you need to do?" dialog)
    Add,
    /// A task is held and being reordered
    Move,
    /// Filter prompt open
    Filter,
}

/// State held while a task is being moved. Esc puts it back.
#[derive(Debug, Clone, Copy)]
pub struct MoveState {
    pub original_index: usize,
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Cursor index into the visible rows
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    /// Editing mode enables the delete and move gestures
    pub editing: bool,
    /// Shared input buffer for the add and filter prompts (byte cursor)
    pub input: String,
    pub input_cursor: usize,
    /// Applied title filter (None = all rows visible)
    pub filter: Option<String>,
    pub move_state: Option<MoveState>,
    pub show_help: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(store: TaskStore, config: &Config) -> Self {
        App {
            store,
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            cursor: 0,
            scroll_offset: 0,
            editing: false,
            input: String::new(),
            input_cursor: 0,
            filter: None,
            move_state: None,
            show_help: false,
            status_message: None,
        }
    }

    /// The active filter regex for narrowing rows.
    /// In Filter mode: compiles from the current input. Otherwise: from the
    /// applied filter. Falls back to a literal match for invalid patterns.
    pub fn filter_re(&self) -> Option<Regex> {
        let pattern = match self.mode {
            Mode::Filter if !self.input.is_empty() => &self.input,
            Mode::Filter => return None,
            _ => self.filter.as_deref()?,
        };
        Regex::new(&format!("(?i){}", pattern))
            .or_else(|_| Regex::new(&format!("(?i){}", regex::escape(pattern))))
            .ok()
    }

    /// Store indices of the rows currently visible (filter applied).
    pub fn visible_indices(&self) -> Vec<usize> {
        match self.filter_re() {
            None => (0..self.store.len()).collect(),
            Some(re) => self
                .store
                .tasks()
                .iter()
                .enumerate()
                .filter(|(_, t)| re.is_match(&t.title))
                .map(|(i, _)| i)
                .collect(),
        }
    }

    /// Store index of the task under the cursor, if any row is visible.
    pub fn cursor_store_index(&self) -> Option<usize> {
        self.visible_indices().get(self.cursor).copied()
    }

    /// Keep the cursor inside the visible rows after any mutation.
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_indices().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Drain queued store events. `Emptied` drops the TUI out of editing
    /// mode — with nothing left to delete or move, the gestures make no sense.
    pub fn apply_store_events(&mut self) {
        for event in self.store.drain_events() {
            match event {
                StoreEvent::Changed => self.clamp_cursor(),
                StoreEvent::Emptied => {
                    self.editing = false;
                    self.move_state = None;
                    if self.mode == Mode::Move {
                        self.mode = Mode::Navigate;
                    }
                }
            }
        }
    }

    /// Record an error in the status row instead of crashing the shell.
    pub fn report_error(&mut self, e: impl std::fmt::Display) {
        self.status_message = Some(format!("error: {}", e));
    }

    /// Guard held across a store mutation so a concurrent `tk` invocation
    /// cannot interleave its read-modify-write of the prefs file with ours.
    /// `Ok(None)` when the store has no backing directory.
    pub(crate) fn lock_store(&self) -> Result<Option<FileLock>, LockError> {
        match self.store.store_dir() {
            Some(dir) => FileLock::acquire(dir, LOCK_WAIT).map(Some),
            None => Ok(None),
        }
    }
}

/// Run the TUI application
pub fn run(store_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::read_config(store_dir)?;
    let store = TaskStore::load(store_dir);
    let watcher = StoreWatcher::start(store_dir).ok();

    let mut app = App::new(store, &config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app, watcher.as_ref());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: Option<&StoreWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        // Pick up prefs writes from other processes. Skipped mid-move so the
        // held task isn't yanked out from under the user.
        if app.mode != Mode::Move
            && let Some(w) = watcher
            && !w.poll().is_empty()
        {
            app.store.reload();
        }

        app.apply_store_events();

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
