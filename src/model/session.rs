use crate::io::store::{RecordStore, StoreError};

use super::collection::Collection;
use super::record::Record;

/// One front end's working copy of a collection, paired with the store it
/// was loaded from.
///
/// Every operation receives the session explicitly; nothing about the
/// collection or its file path lives in global state.
#[derive(Debug)]
pub struct Session<R: Record> {
    store: RecordStore<R>,
    records: Collection<R>,
}

impl<R: Record> Session<R> {
    /// Load the collection from the store.
    pub fn open(store: RecordStore<R>) -> Result<Self, StoreError> {
        let records = store.load()?.into_iter().collect();
        Ok(Session { store, records })
    }

    pub fn records(&self) -> &Collection<R> {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut Collection<R> {
        &mut self.records
    }

    /// Write the whole collection back to the store.
    pub fn persist(&self) -> Result<(), StoreError> {
        self.store.save(self.records.records())
    }

    /// Discard the in-memory copy and re-read the backing file.
    pub fn reload(&mut self) -> Result<(), StoreError> {
        let fresh = self.store.load()?;
        self.records.replace_all(fresh);
        Ok(())
    }
}
