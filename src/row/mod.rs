//! A single to-do row: completion marker, editable title, edit/cancel and
//! delete controls.
//!
//! The row never changes its task. Toggle, rename and delete requests are
//! forwarded to a [`TaskActions`] collaborator; the row only keeps whether
//! its title is being edited and the uncommitted text.

pub mod actions;
pub mod buffer;
pub mod focus;
pub mod state;
pub mod view;

pub use actions::{Callbacks, RecordingActions, TaskActions, TaskCommand};
pub use buffer::{EditBuffer, EditOp};
pub use focus::{FocusChange, FocusSync, FocusTarget, TitleFocus};
pub use state::{RowEvent, RowMode, RowState, Transition, transition};
pub use view::{DeleteControl, EditControl, MarkerView, RowView, TitleView};

use tracing::debug;

use crate::model::Task;

#[derive(Debug, Clone)]
pub struct TaskRow {
    index: usize,
    task: Task,
    state: RowState,
    focus_sync: FocusSync,
    title_focus: TitleFocus,
}

impl TaskRow {
    pub fn new(index: usize, task: Task) -> Self {
        let state = RowState::new(&task.title);
        TaskRow {
            index,
            task,
            state,
            focus_sync: FocusSync::new(),
            title_focus: TitleFocus::default(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn mode(&self) -> RowMode {
        self.state.mode
    }

    pub fn is_editing(&self) -> bool {
        self.state.is_editing()
    }

    /// Text currently shown in the title field
    pub fn buffer(&self) -> &str {
        self.state.buffer.text()
    }

    pub fn title_focused(&self) -> bool {
        self.title_focus.is_focused()
    }

    pub fn marker_id(&self) -> String {
        format!("marker-{}", self.index)
    }

    pub fn button_id(&self) -> String {
        format!("button-{}", self.index)
    }

    /// Run one event through the state machine and forward its command, if any.
    pub fn dispatch<A: TaskActions + ?Sized>(&mut self, event: RowEvent, actions: &mut A) {
        let from = self.state.mode;
        let label = event_label(&event);
        let Transition { state, command } = transition(&self.state, event, &self.task);
        if state.mode != from {
            debug!(
                index = self.index,
                id = self.task.id,
                event = label,
                ?from,
                to = ?state.mode,
                "row transition"
            );
        }
        self.state = state;
        if let Some(command) = command {
            debug!(index = self.index, ?command, "row command");
            command.apply(actions);
        }
    }

    pub fn press_marker<A: TaskActions + ?Sized>(&mut self, actions: &mut A) {
        self.dispatch(RowEvent::PressMarker, actions);
    }

    pub fn press_edit_control<A: TaskActions + ?Sized>(&mut self, actions: &mut A) {
        self.dispatch(RowEvent::PressEditControl, actions);
    }

    pub fn cancel<A: TaskActions + ?Sized>(&mut self, actions: &mut A) {
        self.dispatch(RowEvent::Cancel, actions);
    }

    pub fn submit<A: TaskActions + ?Sized>(&mut self, actions: &mut A) {
        self.dispatch(RowEvent::Submit, actions);
    }

    pub fn press_delete<A: TaskActions + ?Sized>(&mut self, actions: &mut A) {
        self.dispatch(RowEvent::PressDelete, actions);
    }

    pub fn change_text<A: TaskActions + ?Sized>(
        &mut self,
        text: impl Into<String>,
        actions: &mut A,
    ) {
        self.dispatch(RowEvent::ChangeText(text.into()), actions);
    }

    pub fn edit<A: TaskActions + ?Sized>(&mut self, op: EditOp, actions: &mut A) {
        self.dispatch(RowEvent::Edit(op), actions);
    }

    /// Receive the caller's current version of the task.
    ///
    /// While viewing, the title field resyncs to the new title. While editing,
    /// the typed text is left alone.
    pub fn set_task(&mut self, task: Task) {
        if !self.is_editing() && self.state.buffer.text() != task.title {
            self.state.buffer.set_text(task.title.as_str());
        }
        self.task = task;
    }

    /// Apply pending focus changes now that the current mode has been drawn.
    pub fn after_render(&mut self) -> Option<FocusChange> {
        let change = self
            .focus_sync
            .after_render(self.state.mode, &mut self.title_focus);
        if let Some(change) = change {
            debug!(index = self.index, ?change, "title focus");
        }
        change
    }

    /// Give the title focus without a mode change (e.g. a click on an editing title)
    pub fn focus_title(&mut self) {
        if self.is_editing() {
            self.title_focus.focus();
        }
    }

    /// Take focus away from the title without a mode change
    pub fn blur_title(&mut self) {
        self.title_focus.blur();
    }

    pub fn view(&self) -> RowView<'_> {
        let editing = self.is_editing();
        let focused = self.title_focused();
        RowView {
            button_id: self.button_id(),
            marker: MarkerView {
                id: self.marker_id(),
                done: self.task.done,
                check_visible: self.task.done,
            },
            title: TitleView {
                text: self.state.buffer.text(),
                editable: editing,
                focused,
                done: self.task.done,
                cursor: (editing && focused).then(|| self.state.buffer.cursor()),
            },
            edit_control: if editing {
                EditControl::CancelEditing
            } else {
                EditControl::StartEditing
            },
            delete: DeleteControl {
                enabled: !editing,
                dimmed: editing,
            },
        }
    }
}

fn event_label(event: &RowEvent) -> &'static str {
    match event {
        RowEvent::PressMarker => "press_marker",
        RowEvent::PressEditControl => "press_edit_control",
        RowEvent::Cancel => "cancel",
        RowEvent::Submit => "submit",
        RowEvent::PressDelete => "press_delete",
        RowEvent::ChangeText(_) => "change_text",
        RowEvent::Edit(_) => "edit",
    }
}
