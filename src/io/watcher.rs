use std::path::Path;
use std::sync::mpsc;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// Events sent from the file watcher to the TUI event loop.
#[derive(Debug)]
pub enum FileEvent {
    /// The prefs file changed on disk (external edit or another process).
    PrefsChanged,
}

/// A file system watcher for the store directory.
///
/// Lets the TUI pick up writes made by concurrent `tk` CLI invocations or by
/// the user editing prefs.json directly.
pub struct StoreWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<FileEvent>,
}

impl StoreWatcher {
    /// Start watching the given store directory.
    /// Returns a `StoreWatcher` whose `poll()` method should be called each tick.
    pub fn start(store_dir: &Path) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let prefs_path = super::prefs::prefs_path(store_dir);

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                let event = match result {
                    Ok(e) => e,
                    Err(_) => return,
                };

                match event.kind {
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {}
                    _ => return,
                }

                // Only the prefs file matters; ignore .lock and temp files
                if event.paths.iter().any(|p| p == &prefs_path) {
                    let _ = tx.send(FileEvent::PrefsChanged);
                }
            },
            Config::default(),
        )?;

        watcher.watch(store_dir, RecursiveMode::NonRecursive)?;
        Ok(StoreWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Non-blocking poll for pending file events.
    /// Returns all queued events (may be empty).
    pub fn poll(&self) -> Vec<FileEvent> {
        let mut events = Vec::new();
        while let Ok(evt) = self.rx.try_recv() {
            events.push(evt);
        }
        events
    }
}
