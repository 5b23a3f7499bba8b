mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use crate::io::store::StoreError;

use super::app::{App, Mode};

use edit::handle_entry;
use navigate::handle_navigate;

/// Handle a key event in the current mode.
///
/// Rejected input ends up in the status row. Only a storage failure is
/// returned, and it ends the UI.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<(), StoreError> {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return Ok(());
    }
    app.status = None;

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Add | Mode::Edit(_) => handle_entry(app, key),
    }
}
