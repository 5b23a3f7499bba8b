use std::iter::{Enumerate, FusedIterator};

use indexmap::IndexMap;
use indexmap::map::Values;

/// Durable in-process identifier for a record.
///
/// Ids are handed out on insertion and never reused within a collection, so
/// they stay valid while other records are removed. They are not written to
/// disk: a reload assigns fresh ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u64);

/// Ordered arena of records.
///
/// Insertion order is display order. The 1-based display index is derived
/// from position, so removing a record shifts every later index down by one.
#[derive(Debug, Clone)]
pub struct Collection<R> {
    records: IndexMap<RecordId, R>,
    next_id: u64,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Collection {
            records: IndexMap::new(),
            next_id: 0,
        }
    }
}

impl<R> Collection<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record at the end and return its id.
    pub fn push(&mut self, record: R) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        self.records.insert(id, record);
        id
    }

    /// Id of the record shown at a 1-based display index.
    pub fn id_at(&self, index: usize) -> Option<RecordId> {
        let pos = index.checked_sub(1)?;
        self.records.get_index(pos).map(|(id, _)| *id)
    }

    /// 1-based display index of a record.
    pub fn index_of(&self, id: RecordId) -> Option<usize> {
        self.records.get_index_of(&id).map(|pos| pos + 1)
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.get(&id)
    }

    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut R> {
        self.records.get_mut(&id)
    }

    /// Remove a record, shifting the ones after it up.
    pub fn remove(&mut self, id: RecordId) -> Option<R> {
        self.records.shift_remove(&id)
    }

    /// Records in display order.
    pub fn records(&self) -> impl Iterator<Item = &R> {
        self.records.values()
    }

    /// `(1-based index, record)` pairs in display order.
    pub fn entries(&self) -> Entries<'_, R> {
        Entries {
            inner: self.records.values().enumerate(),
        }
    }

    /// Replace the whole collection, e.g. after re-reading the backing file.
    pub fn replace_all(&mut self, records: impl IntoIterator<Item = R>) {
        self.records.clear();
        self.extend(records);
    }
}

impl<R> Extend<R> for Collection<R> {
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        for record in iter {
            self.push(record);
        }
    }
}

impl<R> FromIterator<R> for Collection<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        let mut collection = Collection::new();
        collection.extend(iter);
        collection
    }
}

/// Iterator over `(1-based index, record)` pairs.
///
/// Borrowing the collection, it reflects one moment in time; list again to
/// see later changes.
#[derive(Debug, Clone)]
pub struct Entries<'a, R> {
    inner: Enumerate<Values<'a, RecordId, R>>,
}

impl<'a, R> Iterator for Entries<'a, R> {
    type Item = (usize, &'a R);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(pos, r)| (pos + 1, r))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<R> ExactSizeIterator for Entries<'_, R> {}

impl<R> FusedIterator for Entries<'_, R> {}
