use std::io;
use std::panic::{self, PanicHookInfo};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::store::StoreError;
use crate::model::{RecordId, Session, Task};
use crate::ops::OpError;

use super::entry::EntryLine;
use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving the selection and running single-key actions
    Navigate,
    /// Typing a new task into the entry line
    Add,
    /// Rewriting the description of an existing task
    Edit(RecordId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
}

/// One-line message shown in the status row until the next key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// Main application state
pub struct App {
    pub session: Session<Task>,
    pub mode: Mode,
    pub theme: Theme,
    pub should_quit: bool,
    /// Selected row (0-based) in the task list
    pub cursor: usize,
    /// First visible row of the task list
    pub scroll_offset: usize,
    pub entry: EntryLine,
    pub status: Option<StatusMessage>,
}

impl App {
    pub fn new(session: Session<Task>, theme: Theme) -> Self {
        App {
            session,
            mode: Mode::Navigate,
            theme,
            should_quit: false,
            cursor: 0,
            scroll_offset: 0,
            entry: EntryLine::default(),
            status: None,
        }
    }

    pub fn task_count(&self) -> usize {
        self.session.records().len()
    }

    /// 1-based index of the selected task, if the list is not empty
    pub fn selected_index(&self) -> Option<usize> {
        (self.cursor < self.task_count()).then_some(self.cursor + 1)
    }

    pub fn selected_id(&self) -> Option<RecordId> {
        self.selected_index()
            .and_then(|index| self.session.records().id_at(index))
    }

    /// Keep the cursor on an existing row after the list shrinks.
    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.task_count().saturating_sub(1));
    }

    /// Re-read the task file and redraw from it.
    pub fn refresh(&mut self) -> Result<(), StoreError> {
        self.session.reload()?;
        self.clamp_cursor();
        Ok(())
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            kind: StatusKind::Info,
            text: text.into(),
        });
    }

    pub fn warn(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            kind: StatusKind::Warning,
            text: text.into(),
        });
    }

    /// Sort an operation result into success, a user-facing warning, or a
    /// storage failure that ends the UI.
    pub fn settle<T>(&mut self, result: Result<T, OpError>) -> Result<Option<T>, StoreError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(OpError::Store(e)) => Err(e),
            Err(e) => {
                log::info!("{}", e);
                self.warn(e.to_string());
                Ok(None)
            }
        }
    }
}

/// Run the windowed to-do UI until the user quits
pub fn run(session: Session<Task>, theme: Theme) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(session, theme);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let previous_hook = install_panic_hook(restore_terminal);
    let result = run_event_loop(&mut terminal, &mut app);
    reinstate_panic_hook(previous_hook);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Run `restore` ahead of the current panic hook. Returns the hook that was
/// replaced, for [`reinstate_panic_hook`].
fn install_panic_hook(restore: fn()) -> Arc<PanicHook> {
    let previous = Arc::new(panic::take_hook());
    let chained = Arc::clone(&previous);
    panic::set_hook(Box::new(move |info| {
        restore();
        chained(info);
    }));
    previous
}

/// Put back the hook [`install_panic_hook`] replaced.
fn reinstate_panic_hook(previous: Arc<PanicHook>) {
    // Dropping our hook releases its clone of `previous`
    drop(panic::take_hook());
    match Arc::try_unwrap(previous) {
        Ok(hook) => panic::set_hook(hook),
        Err(shared) => panic::set_hook(Box::new(move |info| shared(info))),
    }
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key)?;
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
