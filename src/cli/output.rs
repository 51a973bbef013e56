use crate::model::{Task, TaskList};

/// Format a single task as a one-line summary: `[x] 1 Buy milk`
pub fn format_task_line(task: &Task) -> String {
    let mark = if task.done { 'x' } else { ' ' };
    format!("[{}] {} {}", mark, task.id, task.title)
}

/// One line per task, or a placeholder for an empty list
pub fn format_task_list(list: &TaskList) -> Vec<String> {
    if list.is_empty() {
        return vec!["No tasks".to_string()];
    }
    list.tasks().iter().map(format_task_line).collect()
}

/// Pretty JSON array of tasks
pub fn task_list_json(list: &TaskList) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(list)
}
