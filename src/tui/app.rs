use std::collections::HashMap;
use std::io;
use std::panic::PanicHookInfo;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::cli::commands::Cli;
use crate::cli::handlers::{initial_task_list, load_config_cwd, print_task_list};
use crate::model::{TaskId, TaskList, UiConfig};
use crate::row::{FocusChange, RowEvent, TaskRow};

use super::input;
use super::render;
use super::theme::Theme;

/// Which control of a row a screen cell belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Marker,
    Title,
    EditControl,
    Delete,
}

/// Screen regions of one drawn row, recorded during render for mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHitbox {
    /// Index into `App::rows`
    pub row: usize,
    pub marker: Rect,
    pub title: Rect,
    pub edit: Rect,
    pub delete: Rect,
}

impl RowHitbox {
    pub fn target_at(&self, x: u16, y: u16) -> Option<HitTarget> {
        [
            (self.marker, HitTarget::Marker),
            (self.title, HitTarget::Title),
            (self.edit, HitTarget::EditControl),
            (self.delete, HitTarget::Delete),
        ]
        .into_iter()
        .find(|(rect, _)| rect_contains(*rect, x, y))
        .map(|(_, target)| target)
    }
}

fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Main application state
pub struct App {
    /// The parent list; rows report every change to it
    pub list: TaskList,
    /// One row per task, in list order
    pub rows: Vec<TaskRow>,
    /// Heading shown above the list
    pub heading: String,
    pub theme: Theme,
    pub should_quit: bool,
    /// Cursor row index
    pub cursor: usize,
    /// First visible row
    pub scroll: usize,
    /// Hit regions from the last render
    pub hitboxes: Vec<RowHitbox>,
    /// One-shot message for the status row
    pub status_message: Option<String>,
}

impl App {
    pub fn new(list: TaskList, ui: &UiConfig) -> Self {
        let mut app = App {
            list,
            rows: Vec::new(),
            heading: ui.title.clone(),
            theme: Theme::from_config(ui),
            should_quit: false,
            cursor: 0,
            scroll: 0,
            hitboxes: Vec::new(),
            status_message: None,
        };
        app.reconcile();
        app
    }

    /// Bring rows in line with the list. Rows are keyed by task id so a
    /// surviving task keeps its row-local state.
    pub fn reconcile(&mut self) {
        let mut existing: HashMap<TaskId, TaskRow> = self
            .rows
            .drain(..)
            .map(|row| (row.task().id, row))
            .collect();
        self.rows = self
            .list
            .tasks()
            .iter()
            .enumerate()
            .map(|(i, task)| match existing.remove(&task.id) {
                Some(mut row) => {
                    row.set_index(i);
                    row.set_task(task.clone());
                    row
                }
                None => TaskRow::new(i, task.clone()),
            })
            .collect();
        for id in existing.keys() {
            debug!(id, "row dropped");
        }
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
    }

    /// Send an event to one row, then resync every row with the list.
    pub fn dispatch(&mut self, row: usize, event: RowEvent) {
        let Some(target) = self.rows.get_mut(row) else {
            return;
        };
        if event == RowEvent::PressDelete && target.is_editing() {
            self.status_message = Some("finish editing before deleting".to_string());
        }
        target.dispatch(event, &mut self.list);
        self.reconcile();
    }

    /// Row whose title field currently takes keyboard input
    pub fn focused_row(&self) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.is_editing() && row.title_focused())
    }

    /// Give keyboard focus to an editing row's title, taking it from every other row.
    pub fn focus_row(&mut self, idx: usize) {
        if !self.rows.get(idx).is_some_and(TaskRow::is_editing) {
            return;
        }
        for (i, row) in self.rows.iter_mut().enumerate() {
            if i == idx {
                row.focus_title();
            } else {
                row.blur_title();
            }
        }
        self.cursor = idx;
    }

    /// Apply focus effects for the frame just drawn. Returns true when focus
    /// moved, meaning the next frame must be drawn before reading input.
    pub fn after_render(&mut self) -> bool {
        let mut gained = None;
        let mut changed = false;
        for (i, row) in self.rows.iter_mut().enumerate() {
            match row.after_render() {
                Some(FocusChange::Focused) => {
                    gained = Some(i);
                    changed = true;
                }
                Some(FocusChange::Blurred) => changed = true,
                None => {}
            }
        }
        if let Some(idx) = gained {
            self.focus_row(idx);
        }
        changed
    }

    /// Which row control is drawn at a screen cell
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(usize, HitTarget)> {
        self.hitboxes
            .iter()
            .find_map(|hb| hb.target_at(x, y).map(|target| (hb.row, target)))
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let max = self.rows.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(max);
    }
}

type PanicHook = dyn Fn(&PanicHookInfo<'_>) + Send + Sync + 'static;

/// Runs `restore` ahead of the previously installed panic hook. Dropping the
/// guard puts the previous hook back.
pub struct PanicHookGuard {
    previous: Arc<PanicHook>,
}

impl PanicHookGuard {
    pub fn install<F>(restore: F) -> Self
    where
        F: Fn(&PanicHookInfo<'_>) + Send + Sync + 'static,
    {
        let previous: Arc<PanicHook> = Arc::from(std::panic::take_hook());
        let chained = Arc::clone(&previous);
        std::panic::set_hook(Box::new(move |panic_info| {
            restore(panic_info);
            chained(panic_info);
        }));
        PanicHookGuard { previous }
    }
}

impl Drop for PanicHookGuard {
    fn drop(&mut self) {
        // the hook can't be swapped from a panicking thread
        if std::thread::panicking() {
            return;
        }
        let previous = Arc::clone(&self.previous);
        drop(std::panic::take_hook());
        std::panic::set_hook(Box::new(move |panic_info| previous(panic_info)));
    }
}

/// Run the TUI application
pub fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_cwd(cli)?;
    let list = initial_task_list(&config, &cli.tasks);
    info!(tasks = list.len(), "starting tui");

    let mut app = App::new(list, &config.ui);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal on panic while the session is up
    let panic_guard = PanicHookGuard::install(|panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableBracketedPaste,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        tracing::error!(%panic_info, "panic");
    });

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    drop(panic_guard);

    result?;
    info!(tasks = app.list.len(), done = app.list.done_count(), "tui closed");
    if cli.json {
        print_task_list(&app.list, true)?;
    }
    Ok(())
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // Focus moves only once the new mode is on screen; redraw so the
        // cursor shows up in (or leaves) the title field.
        if app.after_render() {
            continue;
        }

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
