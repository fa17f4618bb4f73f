//! Persistent Store
//!
//! Loads and saves whole collections as JSON text under a key.
//! Absent or undecodable data loads as an empty list; a single malformed
//! record is skipped without losing the rest.

use serde::{de::DeserializeOwned, Serialize};

use super::traits::KeyValueStore;
use crate::error::{StoreError, TrackerError, TrackerResult};

#[derive(Debug, Clone)]
pub struct PersistentStore<S> {
    backend: S,
}

impl<S: KeyValueStore> PersistentStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Load the list under `key`; never fails
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.try_load(key) {
            Ok(items) => items,
            Err(e) => {
                log::warn!("[STORE] {}; starting with an empty list", e);
                Vec::new()
            }
        }
    }

    /// Load the list under `key`, reporting why it could not be read.
    ///
    /// Fails only when the value is not a JSON array; elements that do not
    /// decode are logged and skipped.
    pub fn try_load<T: DeserializeOwned>(&self, key: &str) -> TrackerResult<Vec<T>> {
        let raw = self.backend.get(key).map_err(|source| TrackerError::Persistence {
            key: key.to_string(),
            source,
        })?;
        let Some(text) = raw else {
            return Ok(Vec::new());
        };
        let values: Vec<serde_json::Value> = serde_json::from_str(&text).map_err(|source| TrackerError::Decode {
            key: key.to_string(),
            source,
        })?;

        let mut items = Vec::with_capacity(values.len());
        for (index, value) in values.into_iter().enumerate() {
            match serde_json::from_value(value) {
                Ok(item) => items.push(item),
                Err(source) => {
                    let err = TrackerError::Decode { key: format!("{}[{}]", key, index), source };
                    log::warn!("[STORE] {}; skipping record", err);
                }
            }
        }
        Ok(items)
    }

    /// Serialize `items` and overwrite the value under `key`
    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) -> TrackerResult<()> {
        let persistence = |source: StoreError| TrackerError::Persistence {
            key: key.to_string(),
            source,
        };
        let text = serde_json::to_string(items).map_err(|e| persistence(e.into()))?;
        self.backend.set(key, &text).map_err(persistence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Order, Task};
    use crate::repository::MemoryStore;

    #[test]
    fn test_absent_key_loads_empty() {
        let store = PersistentStore::new(MemoryStore::new());
        let tasks: Vec<Task> = store.load("tasks");
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_corrupt_value_loads_empty() {
        let backend = MemoryStore::new();
        backend.set("tasks", "{not json").unwrap();
        let store = PersistentStore::new(backend);

        let tasks: Vec<Task> = store.load("tasks");
        assert!(tasks.is_empty());
        assert!(matches!(
            store.try_load::<Task>("tasks"),
            Err(TrackerError::Decode { key, .. }) if key == "tasks"
        ));
    }

    #[test]
    fn test_bad_record_does_not_drop_others() {
        let backend = MemoryStore::new();
        backend
            .set(
                "orders",
                r#"[{"text":"A","price":2.5,"quantity":-1,"done":false},
                    {"text":"B","price":1.0,"quantity":3,"done":true}]"#,
            )
            .unwrap();
        let store = PersistentStore::new(backend);

        let orders: Vec<Order> = store.load("orders");
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].text, "B");
        assert!(orders[0].done);
    }

    #[test]
    fn test_not_an_array_is_decode_error() {
        let backend = MemoryStore::new();
        backend.set("tasks", r#"{"text":"a","done":false}"#).unwrap();
        let store = PersistentStore::new(backend);
        assert!(matches!(store.try_load::<Task>("tasks"), Err(TrackerError::Decode { .. })));
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let backend = MemoryStore::new();
        backend.set("orders", r#"[{"text":"Pen","done":false}]"#).unwrap();
        let store = PersistentStore::new(backend);
        let orders: Vec<Order> = store.load("orders");
        assert!(orders.is_empty());
    }

    #[test]
    fn test_round_trip() {
        let store = PersistentStore::new(MemoryStore::new());
        let orders = vec![
            Order { text: "Pen".to_string(), price: 1.5, quantity: 10, done: false },
            Order { text: "Ink \"blue\"".to_string(), price: 0.1 + 0.2, quantity: 0, done: true },
        ];
        store.save("orders", &orders).unwrap();
        assert_eq!(store.load::<Order>("orders"), orders);

        let tasks = vec![
            Task { text: "a".to_string(), done: true },
            Task { text: "ünïcödé <b>".to_string(), done: false },
        ];
        store.save("tasks", &tasks).unwrap();
        assert_eq!(store.load::<Task>("tasks"), tasks);
    }

    #[test]
    fn test_reads_plain_layout() {
        let backend = MemoryStore::new();
        backend
            .set("orders", r#"[{"text":"Pen","price":1.5,"quantity":10,"done":false}]"#)
            .unwrap();
        let store = PersistentStore::new(backend);
        let orders: Vec<Order> = store.load("orders");
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].quantity, 10);
    }
}
