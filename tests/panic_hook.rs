//! The TUI's terminal-restoring panic hook is only active during a session.
//!
//! Panic hooks are process-wide, so this lives in its own test binary.

use std::panic;
use std::sync::atomic::{AtomicUsize, Ordering};

use taskrow::tui::app::PanicHookGuard;

static PREVIOUS_CALLS: AtomicUsize = AtomicUsize::new(0);
static RESTORE_CALLS: AtomicUsize = AtomicUsize::new(0);

#[test]
fn restore_runs_only_while_guard_is_alive() {
    panic::set_hook(Box::new(|_| {
        PREVIOUS_CALLS.fetch_add(1, Ordering::SeqCst);
    }));

    let guard = PanicHookGuard::install(|_| {
        RESTORE_CALLS.fetch_add(1, Ordering::SeqCst);
    });
    assert!(panic::catch_unwind(|| {
        panic!("during session");
    })
    .is_err());
    assert_eq!(RESTORE_CALLS.load(Ordering::SeqCst), 1);
    assert_eq!(PREVIOUS_CALLS.load(Ordering::SeqCst), 1);

    drop(guard);
    assert!(panic::catch_unwind(|| {
        panic!("after session");
    })
    .is_err());
    assert_eq!(RESTORE_CALLS.load(Ordering::SeqCst), 1);
    assert_eq!(PREVIOUS_CALLS.load(Ordering::SeqCst), 2);
}
