//! Domain Layer - Core Record Trait
//!
//! Contract shared by every persisted record kind, plus the
//! session-scoped identity attached to records held in memory.

use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

/// Core trait for all tracked records
pub trait Record: Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned + Send + Sync {
    /// Human-readable kind, used in logs and errors
    const KIND: &'static str;

    /// Completion status
    fn is_done(&self) -> bool;

    /// Set completion status
    fn set_done(&mut self, done: bool);
}

/// Opaque identifier assigned when a record enters a repository.
///
/// Not persisted. Unique per repository for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u32);

impl RecordId {
    pub(crate) fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A record paired with its in-memory identity
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<T> {
    pub id: RecordId,
    pub record: T,
}
