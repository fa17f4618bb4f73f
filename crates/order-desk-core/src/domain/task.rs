//! Task Record
//!
//! A free-text to-do line with a completion flag.

use serde::{Deserialize, Serialize};
use super::error::ValidationError;
use super::record::Record;

/// A task as persisted under the `tasks` key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Trimmed, non-empty text
    pub text: String,
    /// Completion status
    pub done: bool,
}

impl Task {
    /// Build a pending task from raw input, trimming it first
    pub fn new(text: &str) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyTask);
        }
        Ok(Self {
            text: text.to_string(),
            done: false,
        })
    }
}

impl Record for Task {
    const KIND: &'static str = "task";

    fn is_done(&self) -> bool {
        self.done
    }

    fn set_done(&mut self, done: bool) {
        self.done = done;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation_trims() {
        let task = Task::new("  buy paper ").unwrap();
        assert_eq!(task.text, "buy paper");
        assert!(!task.done);
    }

    #[test]
    fn test_blank_task_rejected() {
        assert_eq!(Task::new(""), Err(ValidationError::EmptyTask));
        assert_eq!(Task::new("   "), Err(ValidationError::EmptyTask));
    }

    #[test]
    fn test_task_wire_format() {
        let task = Task { text: "call".to_string(), done: true };
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"text":"call","done":true}"#);
    }
}
