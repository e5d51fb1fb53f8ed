use std::path::{Path, PathBuf};

use crate::io::prefs::{self, PrefsError};
use crate::model::task::Task;
use crate::ops::list_ops::{self, ListError};

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    List(#[from] ListError),
    #[error(transparent)]
    Prefs(#[from] PrefsError),
}

/// Change notifications queued by the store and drained by the shell.
/// The shell decides what to do with them — the TUI re-renders every frame
/// anyway and only cares about `Emptied`; the CLI ignores them entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// The list changed.
    Changed,
    /// A remove left the list empty. Shells with an editing mode
    /// should drop out of it; others are free to ignore this.
    Emptied,
}

/// The in-memory ordered task list plus its mutation and persistence
/// operations. Every effective mutation rewrites the persisted list in full;
/// restore (`load` / `replace_all`) never writes.
pub struct TaskStore {
    tasks: Vec<Task>,
    store_dir: Option<PathBuf>,
    events: Vec<StoreEvent>,
}

impl TaskStore {
    /// An empty in-memory store with no persistence (used by tests and
    /// anything that wants the mutation semantics without a disk file).
    pub fn new() -> Self {
        TaskStore {
            tasks: Vec::new(),
            store_dir: None,
            events: Vec::new(),
        }
    }

    /// Restore the store from the prefs file in `store_dir`. A missing file
    /// or malformed records yield whatever well-formed tasks remain — never
    /// an error. Restoring does not write the file back.
    pub fn load(store_dir: &Path) -> Self {
        TaskStore {
            tasks: prefs::read_tasks(store_dir),
            store_dir: Some(store_dir.to_path_buf()),
            events: Vec::new(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn store_dir(&self) -> Option<&Path> {
        self.store_dir.as_deref()
    }

    /// Append a task. An empty title is a silent no-op (no write, no event);
    /// returns whether a task was added.
    pub fn add(&mut self, title: &str) -> Result<bool, StoreError> {
        if !list_ops::add(&mut self.tasks, title) {
            return Ok(false);
        }
        self.persist()?;
        self.events.push(StoreEvent::Changed);
        Ok(true)
    }

    /// Flip the done flag on the task at `index`.
    pub fn toggle(&mut self, index: usize) -> Result<(), StoreError> {
        list_ops::toggle(&mut self.tasks, index)?;
        self.persist()?;
        self.events.push(StoreEvent::Changed);
        Ok(())
    }

    /// Remove the task at `index`. Queues `Emptied` after `Changed` when the
    /// removal leaves the list empty.
    pub fn remove(&mut self, index: usize) -> Result<Task, StoreError> {
        let removed = list_ops::remove(&mut self.tasks, index)?;
        self.persist()?;
        self.events.push(StoreEvent::Changed);
        if self.tasks.is_empty() {
            self.events.push(StoreEvent::Emptied);
        }
        Ok(removed)
    }

    /// Move the task at `from` to position `to` (standard move semantics).
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), StoreError> {
        list_ops::reorder(&mut self.tasks, from, to)?;
        if from == to {
            return Ok(());
        }
        self.persist()?;
        self.events.push(StoreEvent::Changed);
        Ok(())
    }

    /// Bulk-set the list without writing it back. Used by restore and by the
    /// file-watcher reload — re-writing what was just read would be harmless
    /// but pointless, and in the watcher case would loop.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.events.push(StoreEvent::Changed);
    }

    /// Re-read the task list from disk (watcher reload path).
    pub fn reload(&mut self) {
        if let Some(dir) = self.store_dir.clone() {
            let tasks = prefs::read_tasks(&dir);
            self.replace_all(tasks);
        }
    }

    /// Take all queued change notifications.
    pub fn drain_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.events)
    }

    fn persist(&self) -> Result<(), PrefsError> {
        match &self.store_dir {
            Some(dir) => prefs::write_tasks(dir, &self.tasks),
            None => Ok(()),
        }
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
