//! Task Repository

use crate::domain::{RecordId, Task, ValidationError};
use super::repo::Repository;
use super::traits::KeyValueStore;

pub type TaskRepository<S> = Repository<Task, S>;

impl<S: KeyValueStore> Repository<Task, S> {
    /// Append a pending task. Blank text is rejected without changes.
    pub fn add(&mut self, text: &str) -> Result<RecordId, ValidationError> {
        let task = Task::new(text)?;
        log::info!("[TASK] Added: {}", task.text);
        let id = self.insert(task);
        self.persist();
        Ok(id)
    }
}
