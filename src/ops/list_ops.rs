use crate::model::task::Task;

/// Error type for list operations
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("index out of range: {index} (list has {len} tasks)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Append a new task with the given title to the end of the list.
/// An empty title is a silent no-op; returns whether the list changed.
pub fn add(tasks: &mut Vec<Task>, title: &str) -> bool {
    if title.is_empty() {
        return false;
    }
    tasks.push(Task::new(title));
    true
}

/// Flip the done flag on the task at `index`.
pub fn toggle(tasks: &mut [Task], index: usize) -> Result<(), ListError> {
    let task = checked_mut(tasks, index)?;
    task.done = !task.done;
    Ok(())
}

/// Remove the task at `index`, shifting subsequent tasks left.
pub fn remove(tasks: &mut Vec<Task>, index: usize) -> Result<Task, ListError> {
    check_index(tasks, index)?;
    Ok(tasks.remove(index))
}

/// Move the task at `from` to position `to`, where `to` is measured against
/// the list with the item already removed (standard move semantics — moving
/// to `len - 1` puts the task last).
pub fn reorder(tasks: &mut Vec<Task>, from: usize, to: usize) -> Result<(), ListError> {
    check_index(tasks, from)?;
    check_index(tasks, to)?;
    if from == to {
        return Ok(());
    }
    let task = tasks.remove(from);
    tasks.insert(to, task);
    Ok(())
}

fn check_index(tasks: &[Task], index: usize) -> Result<(), ListError> {
    if index >= tasks.len() {
        return Err(ListError::IndexOutOfRange {
            index,
            len: tasks.len(),
        });
    }
    Ok(())
}

fn checked_mut(tasks: &mut [Task], index: usize) -> Result<&mut Task, ListError> {
    let len = tasks.len();
    tasks
        .get_mut(index)
        .ok_or(ListError::IndexOutOfRange { index, len })
}
