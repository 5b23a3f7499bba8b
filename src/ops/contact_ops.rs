use crate::model::{Contact, ContactPatch, Session};

use super::index::{record, record_mut, resolve};
use super::{Listing, OpError, Outcome, listing, remove_at};

/// What a contact search found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<'a> {
    /// The contact book is empty, so there was nothing to search
    NoContacts,
    /// Matching contacts as `(1-based index, contact)`, in book order.
    /// May be empty.
    Matches(Vec<(usize, &'a Contact)>),
}

/// Add a contact after trimming every field.
///
/// Rejected when an existing contact has the same name (ignoring case) or
/// exactly the same phone number.
pub fn add_contact<'s>(
    session: &'s mut Session<Contact>,
    candidate: &Contact,
) -> Result<&'s Contact, OpError> {
    let candidate = candidate.trimmed();
    if session
        .records()
        .records()
        .any(|existing| existing.clashes_with(&candidate))
    {
        log::info!("rejected duplicate contact {:?}", candidate.name);
        return Err(OpError::Duplicate);
    }
    let id = session.records_mut().push(candidate);
    session.persist()?;
    let index = session.records().len();
    record(session, id, index)
}

/// Enumerate contacts as `(1-based index, contact)`.
pub fn view_contacts(session: &Session<Contact>) -> Listing<'_, Contact> {
    listing(session)
}

/// Find contacts whose name contains `query` ignoring case, or whose phone
/// contains it exactly.
///
/// The query is trimmed first; an empty query matches every contact.
pub fn search_contacts<'a>(session: &'a Session<Contact>, query: &str) -> SearchResult<'a> {
    let records = session.records();
    if records.is_empty() {
        return SearchResult::NoContacts;
    }
    let query = query.trim();
    let folded = query.to_lowercase();
    let matches = records
        .entries()
        .filter(|(_, c)| c.name.to_lowercase().contains(&folded) || c.phone.contains(query))
        .collect();
    SearchResult::Matches(matches)
}

/// Update the contact at a 1-based index. Fields left `None` in the patch
/// keep their current value.
///
/// The name/phone uniqueness rule of [`add_contact`] is not re-checked here,
/// so an update can make two contacts clash.
pub fn update_contact(
    session: &mut Session<Contact>,
    index: usize,
    patch: ContactPatch,
) -> Result<Outcome, OpError> {
    let id = resolve(session, index)?;
    let contact = record_mut(session, id, index)?;
    if !patch.apply(contact) {
        return Ok(Outcome::Unchanged);
    }
    session.persist()?;
    Ok(Outcome::Updated)
}

/// Remove the contact at a 1-based index, returning it.
pub fn delete_contact(session: &mut Session<Contact>, index: usize) -> Result<Contact, OpError> {
    remove_at(session, index)
}
