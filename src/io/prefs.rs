use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tempfile::NamedTempFile;

use crate::model::task::Task;

/// The fixed key the task list is stored under.
pub const TASKS_KEY: &str = "tasks";

const PREFS_FILE: &str = "prefs.json";

/// Error type for preference-store writes. Reads never fail — a missing or
/// malformed file is treated as empty.
#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not encode tasks: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Path of the prefs file inside a store directory
pub fn prefs_path(store_dir: &Path) -> PathBuf {
    store_dir.join(PREFS_FILE)
}

/// Read the whole prefs document. A missing file, unparseable JSON, or a
/// non-object top level all yield an empty document.
fn read_document(store_dir: &Path) -> Map<String, Value> {
    let content = match fs::read_to_string(prefs_path(store_dir)) {
        Ok(c) => c,
        Err(_) => return Map::new(),
    };
    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// Read the task list stored under [`TASKS_KEY`].
///
/// Restore is defensive: a record that is not an object with a string `title`
/// and boolean `done` is dropped; every well-formed record is kept in order.
/// A missing key or a value that is not an array yields an empty list.
pub fn read_tasks(store_dir: &Path) -> Vec<Task> {
    let doc = read_document(store_dir);
    match doc.get(TASKS_KEY) {
        Some(Value::Array(records)) => records
            .iter()
            .filter_map(|record| serde_json::from_value::<Task>(record.clone()).ok())
            .collect(),
        _ => Vec::new(),
    }
}

/// Write the full task list under [`TASKS_KEY`], replacing the previous
/// value. Other keys in the prefs document are preserved.
pub fn write_tasks(store_dir: &Path, tasks: &[Task]) -> Result<(), PrefsError> {
    let mut doc = read_document(store_dir);
    doc.insert(TASKS_KEY.to_string(), serde_json::to_value(tasks)?);
    let content = serde_json::to_string_pretty(&Value::Object(doc))?;

    let path = prefs_path(store_dir);
    if !store_dir.exists() {
        fs::create_dir_all(store_dir).map_err(|e| PrefsError::WriteError {
            path: path.clone(),
            source: e,
        })?;
    }
    atomic_write(&path, content.as_bytes()).map_err(|e| PrefsError::WriteError {
        path,
        source: e,
    })
}

/// Write via a temp file in the same directory, then rename into place.
fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
