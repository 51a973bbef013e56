use serde::{Deserialize, Serialize};

/// Identifier of a task, unique within its owning list
pub type TaskId = u64;

/// A single to-do entry. Owned by the list; rows only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Task title text (may be empty)
    pub title: String,
    /// Completion flag
    #[serde(default)]
    pub done: bool,
}

impl Task {
    /// Create an open task
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Task {
            id,
            title: title.into(),
            done: false,
        }
    }

    /// Builder-style completion flag
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }
}
