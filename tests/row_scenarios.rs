//! Behaviour of a single task row against a recording collaborator.

use pretty_assertions::assert_eq;
use taskrow::model::Task;
use taskrow::row::{EditControl, RecordingActions, RowMode, TaskCommand, TaskRow};

fn milk_row() -> (TaskRow, RecordingActions) {
    let mut row = TaskRow::new(0, Task::new(1, "Buy milk"));
    row.after_render();
    (row, RecordingActions::new())
}

/// Start editing and let the focus effect run, as a host would after drawing.
fn start_editing(row: &mut TaskRow, rec: &mut RecordingActions) {
    row.press_edit_control(rec);
    row.after_render();
}

// ============================================================================
// Marker
// ============================================================================

#[test]
fn marker_tap_toggles_only() {
    let (mut row, mut rec) = milk_row();
    row.press_marker(&mut rec);
    assert_eq!(rec.calls, vec![TaskCommand::ToggleDone(1)]);
}

#[test]
fn marker_tap_toggles_while_editing_too() {
    let (mut row, mut rec) = milk_row();
    start_editing(&mut row, &mut rec);
    row.press_marker(&mut rec);
    assert_eq!(rec.calls, vec![TaskCommand::ToggleDone(1)]);
    assert_eq!(row.mode(), RowMode::Editing);
}

#[test]
fn marker_reflects_done_flag() {
    for done in [true, false] {
        let row = TaskRow::new(0, Task::new(1, "Buy milk").with_done(done));
        let view = row.view();
        assert_eq!(view.marker.done, done);
        assert_eq!(view.marker.check_visible, done);
        assert_eq!(view.marker.id, "marker-0");
    }
}

// ============================================================================
// Editing
// ============================================================================

#[test]
fn start_editing_focuses_editable_title() {
    let (mut row, mut rec) = milk_row();
    start_editing(&mut row, &mut rec);
    let view = row.view();
    assert!(view.title.editable);
    assert!(view.title.focused);
    assert_eq!(view.edit_control, EditControl::CancelEditing);
    assert!(rec.calls.is_empty());
}

#[test]
fn cancel_reverts_typed_text() {
    let (mut row, mut rec) = milk_row();
    start_editing(&mut row, &mut rec);
    row.change_text("Buy oat milk", &mut rec);
    row.press_edit_control(&mut rec);
    row.after_render();

    assert_eq!(row.buffer(), "Buy milk");
    assert!(!row.title_focused());
    assert!(!row.view().title.editable);
    assert!(rec.calls.is_empty());
}

#[test]
fn submit_renames_once() {
    let (mut row, mut rec) = milk_row();
    start_editing(&mut row, &mut rec);
    row.change_text("Buy oat milk", &mut rec);
    row.submit(&mut rec);
    row.after_render();

    assert_eq!(
        rec.calls,
        vec![TaskCommand::Rename {
            id: 1,
            title: "Buy oat milk".into()
        }]
    );
    assert_eq!(row.mode(), RowMode::Viewing);
    assert!(!row.title_focused());
    assert_eq!(row.buffer(), "Buy oat milk");

    // a second submit has nothing to commit
    row.submit(&mut rec);
    assert_eq!(rec.calls.len(), 1);
}

#[test]
fn submit_forwards_empty_title() {
    let (mut row, mut rec) = milk_row();
    start_editing(&mut row, &mut rec);
    row.change_text("", &mut rec);
    row.submit(&mut rec);
    assert_eq!(
        rec.calls,
        vec![TaskCommand::Rename {
            id: 1,
            title: String::new()
        }]
    );
}

#[test]
fn blur_alone_does_not_leave_editing() {
    let (mut row, mut rec) = milk_row();
    start_editing(&mut row, &mut rec);
    row.blur_title();
    row.after_render();
    assert_eq!(row.mode(), RowMode::Editing);
    assert!(rec.calls.is_empty());
}

// ============================================================================
// Delete
// ============================================================================

#[test]
fn delete_is_inert_while_editing() {
    let (mut row, mut rec) = milk_row();
    start_editing(&mut row, &mut rec);
    assert!(!row.view().delete.enabled);
    row.press_delete(&mut rec);
    assert!(rec.calls.is_empty());

    row.cancel(&mut rec);
    assert!(row.view().delete.enabled);
    row.press_delete(&mut rec);
    assert_eq!(rec.calls, vec![TaskCommand::Remove(1)]);
}

// ============================================================================
// Caller updates
// ============================================================================

#[test]
fn rejected_rename_is_undone_by_caller_resync() {
    let (mut row, mut rec) = milk_row();
    start_editing(&mut row, &mut rec);
    row.change_text("", &mut rec);
    row.submit(&mut rec);
    assert_eq!(row.buffer(), "");

    // caller refused the empty title and re-supplies the unchanged task
    row.set_task(Task::new(1, "Buy milk"));
    assert_eq!(row.buffer(), "Buy milk");
}
