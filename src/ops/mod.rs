pub mod contact_ops;
pub mod index;
pub mod task_ops;

use crate::io::store::StoreError;
use crate::model::{Entries, Record, Session};

/// Error type for record operations.
///
/// Everything except `Store` is a rejected input: the collection and its
/// file are left exactly as they were.
#[derive(Debug, thiserror::Error)]
pub enum OpError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("not a number: {0:?}")]
    InvalidNumber(String),
    #[error("no {noun} numbered {input} (valid: 1-{len})")]
    IndexOutOfRange {
        noun: &'static str,
        input: String,
        len: usize,
    },
    #[error("a contact with this name or phone number already exists")]
    Duplicate,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl OpError {
    /// Storage failures end the session; everything else is reported and
    /// the user may try again.
    pub fn is_fatal(&self) -> bool {
        matches!(self, OpError::Store(_))
    }
}

/// Result of an update that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A field changed and the collection was saved
    Updated,
    /// The new values matched the old ones; nothing was saved
    Unchanged,
}

/// What a list or view operation shows
#[derive(Debug, Clone)]
pub enum Listing<'a, R> {
    /// The collection has no records at all
    Empty,
    /// `(1-based index, record)` pairs in display order
    Entries(Entries<'a, R>),
}

/// Enumerate a session's records, or report that there are none.
pub fn listing<R: Record>(session: &Session<R>) -> Listing<'_, R> {
    let records = session.records();
    if records.is_empty() {
        Listing::Empty
    } else {
        Listing::Entries(records.entries())
    }
}

/// Remove the record at a 1-based index and save.
pub fn remove_at<R: Record>(session: &mut Session<R>, index: usize) -> Result<R, OpError> {
    let id = index::resolve(session, index)?;
    let len = session.records().len();
    let removed = session
        .records_mut()
        .remove(id)
        .ok_or_else(|| index::out_of_range::<R>(index, len))?;
    session.persist()?;
    log::debug!("removed {} {:?}", R::NOUN, removed.label());
    Ok(removed)
}
