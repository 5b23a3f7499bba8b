use crate::model::{Session, Task};

use super::index::{record, record_mut, resolve};
use super::{Listing, OpError, Outcome, listing, remove_at};

/// Append a new, not-done task. The description is trimmed and must not be
/// empty.
pub fn add_task<'s>(session: &'s mut Session<Task>, description: &str) -> Result<&'s Task, OpError> {
    let description = description.trim();
    if description.is_empty() {
        log::info!("rejected empty task");
        return Err(OpError::EmptyField("task description"));
    }
    let id = session.records_mut().push(Task::new(description));
    session.persist()?;
    let index = session.records().len();
    record(session, id, index)
}

/// Enumerate tasks as `(1-based index, task)`.
pub fn list_tasks(session: &Session<Task>) -> Listing<'_, Task> {
    listing(session)
}

/// Replace the description of the task at a 1-based index.
///
/// An empty replacement cancels the whole update. A replacement equal to the
/// current description changes nothing and is not saved.
pub fn update_task(
    session: &mut Session<Task>,
    index: usize,
    description: &str,
) -> Result<Outcome, OpError> {
    let id = resolve(session, index)?;
    let description = description.trim();
    if description.is_empty() {
        log::info!("update of task {} canceled: empty description", index);
        return Err(OpError::EmptyField("task description"));
    }
    let task = record_mut(session, id, index)?;
    if task.description == description {
        return Ok(Outcome::Unchanged);
    }
    task.description = description.to_string();
    session.persist()?;
    Ok(Outcome::Updated)
}

/// Mark the task at a 1-based index as done.
///
/// Marking an already-done task still re-saves the collection.
pub fn mark_done(session: &mut Session<Task>, index: usize) -> Result<&Task, OpError> {
    let id = resolve(session, index)?;
    record_mut(session, id, index)?.done = true;
    session.persist()?;
    record(session, id, index)
}

/// Remove the task at a 1-based index, returning it.
pub fn delete_task(session: &mut Session<Task>, index: usize) -> Result<Task, OpError> {
    remove_at(session, index)
}
