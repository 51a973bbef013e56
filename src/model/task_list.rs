use serde::Serialize;
use tracing::{debug, warn};

use super::task::{Task, TaskId};
use crate::row::TaskActions;

/// In-memory ordered list of tasks; the parent collaborator rows report to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Build a list from (title, done) pairs, numbering ids from 1
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        let tasks = entries
            .into_iter()
            .enumerate()
            .map(|(i, (title, done))| Task::new(i as TaskId + 1, title).with_done(done))
            .collect();
        TaskList { tasks }
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

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Number of completed tasks
    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }
}

impl TaskActions for TaskList {
    fn edit_task(&mut self, id: TaskId, new_title: &str) {
        match self.get_mut(id) {
            Some(task) => {
                debug!(id, title = new_title, "rename task");
                task.title = new_title.to_string();
            }
            None => warn!(id, "rename of unknown task ignored"),
        }
    }

    fn toggle_task_done(&mut self, id: TaskId) {
        match self.get_mut(id) {
            Some(task) => {
                task.done = !task.done;
                debug!(id, done = task.done, "toggle task");
            }
            None => warn!(id, "toggle of unknown task ignored"),
        }
    }

    fn remove_task(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            warn!(id, "removal of unknown task ignored");
        } else {
            debug!(id, "remove task");
        }
    }
}
