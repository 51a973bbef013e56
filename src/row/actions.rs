use crate::model::TaskId;

/// The parent list's side of the row contract.
///
/// Rows never mutate a task themselves: every change is requested through
/// one of these calls. Calls are fire-and-forget; the row assumes they
/// succeed and never observes a result.
pub trait TaskActions {
    /// Rename a task (the new title may be empty)
    fn edit_task(&mut self, id: TaskId, new_title: &str);
    /// Flip a task's completion flag
    fn toggle_task_done(&mut self, id: TaskId);
    /// Delete a task
    fn remove_task(&mut self, id: TaskId);
}

impl<T: TaskActions + ?Sized> TaskActions for &mut T {
    fn edit_task(&mut self, id: TaskId, new_title: &str) {
        (**self).edit_task(id, new_title);
    }

    fn toggle_task_done(&mut self, id: TaskId) {
        (**self).toggle_task_done(id);
    }

    fn remove_task(&mut self, id: TaskId) {
        (**self).remove_task(id);
    }
}

/// One request from a row to its list, in value form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskCommand {
    Rename { id: TaskId, title: String },
    ToggleDone(TaskId),
    Remove(TaskId),
}

impl TaskCommand {
    /// Deliver the command to a collaborator
    pub fn apply<A: TaskActions + ?Sized>(self, actions: &mut A) {
        match self {
            TaskCommand::Rename { id, title } => actions.edit_task(id, &title),
            TaskCommand::ToggleDone(id) => actions.toggle_task_done(id),
            TaskCommand::Remove(id) => actions.remove_task(id),
        }
    }
}

/// `TaskActions` over three closures, for callers that would rather pass callbacks.
pub struct Callbacks<E, T, R> {
    pub edit_task: E,
    pub toggle_task_done: T,
    pub remove_task: R,
}

impl<E, T, R> TaskActions for Callbacks<E, T, R>
where
    E: FnMut(TaskId, &str),
    T: FnMut(TaskId),
    R: FnMut(TaskId),
{
    fn edit_task(&mut self, id: TaskId, new_title: &str) {
        (self.edit_task)(id, new_title);
    }

    fn toggle_task_done(&mut self, id: TaskId) {
        (self.toggle_task_done)(id);
    }

    fn remove_task(&mut self, id: TaskId) {
        (self.remove_task)(id);
    }
}

/// A collaborator that records every call, for tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingActions {
    pub calls: Vec<TaskCommand>,
}

impl RecordingActions {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskActions for RecordingActions {
    fn edit_task(&mut self, id: TaskId, new_title: &str) {
        self.calls.push(TaskCommand::Rename {
            id,
            title: new_title.to_string(),
        });
    }

    fn toggle_task_done(&mut self, id: TaskId) {
        self.calls.push(TaskCommand::ToggleDone(id));
    }

    fn remove_task(&mut self, id: TaskId) {
        self.calls.push(TaskCommand::Remove(id));
    }
}
