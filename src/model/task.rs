use serde::{Deserialize, Serialize};

/// A single to-do entry: a title and a completion flag.
///
/// Tasks have no stable identity — they are addressed by their position in
/// the list, and reordering or deleting shifts everything after them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Task title text
    pub title: String,
    /// Completion flag
    pub done: bool,
}

impl Task {
    /// Create a new, not-yet-done task with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Task {
            title: title.into(),
            done: false,
        }
    }

    /// The character used inside the checkbox `[ ]`
    pub fn marker(&self) -> char {
        if self.done { 'x' } else { ' ' }
    }
}
