use serde::Serialize;

use crate::model::task::Task;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub index: usize,
    pub title: String,
    pub done: bool,
}

#[derive(Serialize)]
pub struct TaskListJson {
    pub tasks: Vec<TaskJson>,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(index: usize, task: &Task) -> TaskJson {
    TaskJson {
        index,
        title: task.title.clone(),
        done: task.done,
    }
}

pub fn list_to_json(tasks: &[Task]) -> TaskListJson {
    TaskListJson {
        tasks: tasks
            .iter()
            .enumerate()
            .map(|(i, t)| task_to_json(i, t))
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a single task as a one-line summary: `[x] 0 Buy milk`
pub fn format_task_line(index: usize, task: &Task) -> String {
    format!("[{}] {} {}", task.marker(), index, task.title)
}

/// Format the whole list, one task per line
pub fn format_task_list(tasks: &[Task]) -> Vec<String> {
    if tasks.is_empty() {
        return vec!["no tasks".to_string()];
    }
    tasks
        .iter()
        .enumerate()
        .map(|(i, t)| format_task_line(i, t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn task_line_shows_marker_index_and_title() {
        let mut task = Task::new("Buy milk");
        assert_eq!(format_task_line(0, &task), "[ ] 0 Buy milk");
        task.done = true;
        assert_eq!(format_task_line(3, &task), "[x] 3 Buy milk");
    }

    #[test]
    fn empty_list_formats_placeholder() {
        assert_eq!(format_task_list(&[]), vec!["no tasks"]);
    }

    #[test]
    fn list_json_is_indexed_in_order() {
        let tasks = vec![Task::new("A"), Task::new("B")];
        let json = serde_json::to_value(list_to_json(&tasks)).unwrap();
        assert_eq!(json["tasks"][0]["index"], 0);
        assert_eq!(json["tasks"][1]["title"], "B");
        assert_eq!(json["tasks"][1]["done"], false);
    }
}
