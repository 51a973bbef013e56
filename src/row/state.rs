//! Row-local state machine.
//!
//! A row is either `Viewing` its task or `Editing` the title. Transitions
//! are pure: they take the current state, an event and the task as the
//! caller currently supplies it, and return the next state together with
//! at most one command for the parent list. Delivering the command and
//! moving input focus are left to the caller.

use crate::model::Task;

use super::actions::TaskCommand;
use super::buffer::{EditBuffer, EditOp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowMode {
    #[default]
    Viewing,
    Editing,
}

/// Everything a row keeps for itself; dropped with the row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowState {
    pub mode: RowMode,
    pub buffer: EditBuffer,
}

impl RowState {
    /// Viewing, with the buffer holding `title`
    pub fn new(title: &str) -> Self {
        RowState {
            mode: RowMode::Viewing,
            buffer: EditBuffer::new(title),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.mode == RowMode::Editing
    }
}

/// User intent directed at one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowEvent {
    /// Tap on the completion marker
    PressMarker,
    /// Tap on the edit/cancel control
    PressEditControl,
    /// Explicit cancel (Esc); only meaningful while editing
    Cancel,
    /// Submit the title field
    Submit,
    /// Tap on the delete control
    PressDelete,
    /// The title field's text changed wholesale
    ChangeText(String),
    /// Cursor-level editing in the title field
    Edit(EditOp),
}

/// Result of one transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: RowState,
    pub command: Option<TaskCommand>,
}

impl Transition {
    fn stay(state: &RowState) -> Self {
        Transition {
            state: state.clone(),
            command: None,
        }
    }
}

/// Compute the next row state for `event`.
pub fn transition(state: &RowState, event: RowEvent, task: &Task) -> Transition {
    match (state.mode, event) {
        (_, RowEvent::PressMarker) => Transition {
            state: state.clone(),
            command: Some(TaskCommand::ToggleDone(task.id)),
        },

        (RowMode::Viewing, RowEvent::PressEditControl) => {
            let mut buffer = state.buffer.clone();
            buffer.move_to_end();
            Transition {
                state: RowState {
                    mode: RowMode::Editing,
                    buffer,
                },
                command: None,
            }
        }

        (RowMode::Editing, RowEvent::PressEditControl | RowEvent::Cancel) => Transition {
            state: RowState::new(&task.title),
            command: None,
        },

        (RowMode::Editing, RowEvent::Submit) => Transition {
            command: Some(TaskCommand::Rename {
                id: task.id,
                title: state.buffer.text().to_string(),
            }),
            state: RowState {
                mode: RowMode::Viewing,
                buffer: state.buffer.clone(),
            },
        },

        (RowMode::Viewing, RowEvent::PressDelete) => Transition {
            state: state.clone(),
            command: Some(TaskCommand::Remove(task.id)),
        },

        (RowMode::Editing, RowEvent::ChangeText(text)) => {
            let mut next = state.clone();
            next.buffer.set_text(text);
            Transition {
                state: next,
                command: None,
            }
        }

        (RowMode::Editing, RowEvent::Edit(op)) => {
            let mut next = state.clone();
            next.buffer.apply(op);
            Transition {
                state: next,
                command: None,
            }
        }

        // Viewing: cancel, submit and typing have nothing to act on.
        // Editing: delete is disabled.
        (RowMode::Viewing, RowEvent::Cancel | RowEvent::Submit)
        | (RowMode::Viewing, RowEvent::ChangeText(_) | RowEvent::Edit(_))
        | (RowMode::Editing, RowEvent::PressDelete) => Transition::stay(state),
    }
}
