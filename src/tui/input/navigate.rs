use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::io::store::StoreError;
use crate::ops::task_ops;
use crate::tui::app::{App, Mode};

const NO_SELECTION: &str = "Please select a task.";

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) -> Result<(), StoreError> {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q') | KeyCode::Esc) => app.should_quit = true,
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => app.should_quit = true,

        (_, KeyCode::Char('j') | KeyCode::Down) => {
            if app.cursor + 1 < app.task_count() {
                app.cursor += 1;
            }
        }
        (_, KeyCode::Char('k') | KeyCode::Up) => app.cursor = app.cursor.saturating_sub(1),
        (_, KeyCode::Char('g') | KeyCode::Home) => app.cursor = 0,
        (_, KeyCode::Char('G') | KeyCode::End) => {
            app.cursor = app.task_count().saturating_sub(1);
        }

        (_, KeyCode::Char('a')) => {
            app.entry.clear();
            app.mode = Mode::Add;
        }
        (_, KeyCode::Char('e')) => begin_edit(app),
        (_, KeyCode::Char('x') | KeyCode::Char(' ')) => mark_selected_done(app)?,
        (_, KeyCode::Char('d')) => delete_selected(app)?,
        (_, KeyCode::Char('r')) => {
            app.refresh()?;
            app.info("Reloaded.");
        }
        _ => {}
    }
    Ok(())
}

/// Prefill the entry line with the selected task's description.
fn begin_edit(app: &mut App) {
    let Some(id) = app.selected_id() else {
        app.warn(NO_SELECTION);
        return;
    };
    if let Some(task) = app.session.records().get(id) {
        let current = task.description.clone();
        app.entry.set(&current);
        app.mode = Mode::Edit(id);
    }
}

fn mark_selected_done(app: &mut App) -> Result<(), StoreError> {
    let Some(index) = app.selected_index() else {
        app.warn(NO_SELECTION);
        return Ok(());
    };
    let result = task_ops::mark_done(&mut app.session, index).map(|_| ());
    if app.settle(result)?.is_some() {
        app.info("Task marked as done.");
    }
    app.refresh()
}

fn delete_selected(app: &mut App) -> Result<(), StoreError> {
    let Some(index) = app.selected_index() else {
        app.warn(NO_SELECTION);
        return Ok(());
    };
    let result = task_ops::delete_task(&mut app.session, index);
    if let Some(removed) = app.settle(result)? {
        app.info(format!("Task '{}' deleted.", removed.description));
    }
    app.refresh()
}
