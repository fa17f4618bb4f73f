//! Generic Repository
//!
//! In-memory ordered collection of records, written back to the store in
//! full after every successful mutation. Records are addressed by
//! `RecordId`; positions shift left on delete.

use crate::domain::{Entry, Record, RecordId};
use crate::error::TrackerError;
use super::store::PersistentStore;
use super::traits::KeyValueStore;

pub struct Repository<T, S> {
    key: String,
    store: PersistentStore<S>,
    entries: Vec<Entry<T>>,
    next_id: u32,
}

impl<T: Record, S: KeyValueStore> Repository<T, S> {
    /// Load the collection stored under `key` (empty if absent or corrupt)
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let store = PersistentStore::new(store);
        let records: Vec<T> = store.load(&key);
        log::debug!("[REPO] Loaded {} {} record(s) from `{}`", records.len(), T::KIND, key);

        let mut repo = Self {
            key,
            store,
            entries: Vec::with_capacity(records.len()),
            next_id: 1,
        };
        for record in records {
            repo.insert(record);
        }
        repo
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in display order
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// Records in display order, without ids
    pub fn records(&self) -> Vec<T> {
        self.entries.iter().map(|e| e.record.clone()).collect()
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.record)
    }

    /// Record currently at `index`
    pub fn at(&self, index: usize) -> Option<&T> {
        self.entries.get(index).map(|e| &e.record)
    }

    /// Id of the record currently at `index`
    pub fn id_at(&self, index: usize) -> Option<RecordId> {
        self.entries.get(index).map(|e| e.id)
    }

    /// Current position of `id`
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Flip the completion flag. Unknown ids are ignored.
    pub fn toggle_done(&mut self, id: RecordId) -> bool {
        let Some(record) = self.get_mut(id) else {
            return false;
        };
        let done = !record.is_done();
        record.set_done(done);
        self.persist();
        log::info!("[REPO] {} {} marked {}", T::KIND, id, if done { "done" } else { "pending" });
        true
    }

    /// Remove a record; later records shift left. Unknown ids are ignored.
    pub fn delete(&mut self, id: RecordId) -> bool {
        let Some(index) = self.position(id) else {
            self.not_found(id);
            return false;
        };
        self.entries.remove(index);
        self.persist();
        log::info!("[REPO] {} {} deleted", T::KIND, id);
        true
    }

    /// Append a record without persisting
    pub(crate) fn insert(&mut self, record: T) -> RecordId {
        let id = RecordId::new(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, record });
        id
    }

    pub(crate) fn get_mut(&mut self, id: RecordId) -> Option<&mut T> {
        match self.position(id) {
            Some(index) => Some(&mut self.entries[index].record),
            None => {
                self.not_found(id);
                None
            }
        }
    }

    /// Rewrite the whole collection; failures are logged, never returned
    pub(crate) fn persist(&self) {
        let records: Vec<&T> = self.entries.iter().map(|e| &e.record).collect();
        if let Err(e) = self.store.save(&self.key, &records) {
            log::error!("[REPO] {}", e);
        }
    }

    pub(crate) fn not_found(&self, id: RecordId) {
        let err = TrackerError::NotFound { kind: T::KIND, id: id.to_string() };
        log::debug!("[REPO] {}, ignoring", err);
    }
}
