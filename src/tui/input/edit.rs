use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::io::store::StoreError;
use crate::model::RecordId;
use crate::ops::{OpError, Outcome, task_ops};
use crate::tui::app::{App, Mode};

/// Keys while the entry line has focus (Add or Edit mode)
pub(super) fn handle_entry(app: &mut App, key: KeyEvent) -> Result<(), StoreError> {
    match key.code {
        KeyCode::Esc => leave_entry(app),
        KeyCode::Enter => match app.mode {
            Mode::Add => submit_add(app)?,
            Mode::Edit(id) => submit_edit(app, id)?,
            Mode::Navigate => {}
        },
        KeyCode::Backspace => app.entry.backspace(),
        KeyCode::Delete => app.entry.delete(),
        KeyCode::Left => app.entry.left(),
        KeyCode::Right => app.entry.right(),
        KeyCode::Home => app.entry.home(),
        KeyCode::End => app.entry.end(),
        KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => app.entry.home(),
        KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => app.entry.end(),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => app.entry.clear(),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.entry.insert(c)
        }
        _ => {}
    }
    Ok(())
}

fn leave_entry(app: &mut App) {
    app.entry.clear();
    app.mode = Mode::Navigate;
}

fn submit_add(app: &mut App) -> Result<(), StoreError> {
    let text = app.entry.text().to_string();
    let result = task_ops::add_task(&mut app.session, &text).map(|task| task.description.clone());
    let added = match result {
        Ok(description) => description,
        Err(OpError::EmptyField(_)) => {
            // Stay in Add mode so the user can type something
            app.warn("Please enter a task description.");
            return Ok(());
        }
        Err(e) => {
            app.settle::<()>(Err(e))?;
            return Ok(());
        }
    };
    leave_entry(app);
    app.refresh()?;
    app.cursor = app.task_count().saturating_sub(1);
    app.info(format!("Task '{}' added.", added));
    Ok(())
}

fn submit_edit(app: &mut App, id: RecordId) -> Result<(), StoreError> {
    let text = app.entry.text().to_string();
    leave_entry(app);

    let Some(index) = app.session.records().index_of(id) else {
        app.warn("Please select a task.");
        return app.refresh();
    };
    match task_ops::update_task(&mut app.session, index, &text) {
        Ok(Outcome::Updated) => app.info("Task updated."),
        Ok(Outcome::Unchanged) => app.info("Task unchanged."),
        Err(OpError::EmptyField(_)) => app.warn("Empty description. Update canceled."),
        Err(e) => {
            app.settle::<()>(Err(e))?;
        }
    }
    app.refresh()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::RecordStore;
    use crate::model::{Session, Task};
    use crate::tui::app::StatusKind;
    use crate::tui::input::handle_key;
    use crate::tui::input::test_keys::{ch, ctrl, key};
    use crate::tui::theme::Theme;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn app_with(dir: &TempDir, json: &str) -> App {
        let path = dir.path().join("tasks.json");
        fs::write(&path, json).unwrap();
        App::new(Session::open(RecordStore::new(path)).unwrap(), Theme::default())
    }

    fn on_disk(dir: &TempDir) -> Vec<Task> {
        RecordStore::<Task>::new(dir.path().join("tasks.json"))
            .load()
            .unwrap()
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key(app, ch(c)).unwrap();
        }
    }

    #[test]
    fn add_appends_and_selects_new_task() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, r#"[{"task":"a","done":false}]"#);
        handle_key(&mut app, ch('a')).unwrap();
        assert_eq!(app.mode, Mode::Add);
        type_text(&mut app, "Buy milk");
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.cursor, 1);
        assert_eq!(on_disk(&dir), vec![Task::new("a"), Task::new("Buy milk")]);
        assert_eq!(app.status.unwrap().text, "Task 'Buy milk' added.");
    }

    #[test]
    fn empty_add_warns_and_stays_in_add_mode() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, "[]");
        handle_key(&mut app, ch('a')).unwrap();
        type_text(&mut app, "   ");
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.mode, Mode::Add);
        let status = app.status.clone().unwrap();
        assert_eq!(status.kind, StatusKind::Warning);
        assert_eq!(status.text, "Please enter a task description.");
        assert!(on_disk(&dir).is_empty());
    }

    #[test]
    fn escape_cancels_without_saving() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, "[]");
        handle_key(&mut app, ch('a')).unwrap();
        type_text(&mut app, "draft");
        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.entry.text(), "");
        assert!(on_disk(&dir).is_empty());
    }

    #[test]
    fn letters_are_text_in_entry_mode() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, "[]");
        handle_key(&mut app, ch('a')).unwrap();
        type_text(&mut app, "qxd");
        assert!(!app.should_quit);
        assert_eq!(app.entry.text(), "qxd");
        handle_key(&mut app, ctrl('u')).unwrap();
        assert_eq!(app.entry.text(), "");
    }

    #[test]
    fn edit_replaces_description() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, r#"[{"task":"old","done":true}]"#);
        handle_key(&mut app, ch('e')).unwrap();
        handle_key(&mut app, ctrl('u')).unwrap();
        type_text(&mut app, "new");
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(
            on_disk(&dir),
            vec![Task {
                description: "new".into(),
                done: true
            }]
        );
        assert_eq!(app.status.unwrap().text, "Task updated.");
    }

    #[test]
    fn edit_to_empty_cancels() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, r#"[{"task":"old","done":false}]"#);
        handle_key(&mut app, ch('e')).unwrap();
        handle_key(&mut app, ctrl('u')).unwrap();
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(on_disk(&dir), vec![Task::new("old")]);
        assert_eq!(
            app.status.unwrap().text,
            "Empty description. Update canceled."
        );
    }

    #[test]
    fn edit_without_changes_reports_unchanged() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with(&dir, r#"[{"task":"old","done":false}]"#);
        handle_key(&mut app, ch('e')).unwrap();
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.status.unwrap().text, "Task unchanged.");
    }
}
