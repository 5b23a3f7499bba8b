use serde::{Deserialize, Serialize};

use super::record::Record;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// What needs doing. Stored under the `task` key on disk.
    #[serde(rename = "task", alias = "description")]
    pub description: String,
    /// Whether the task has been marked done
    #[serde(default)]
    pub done: bool,
}

impl Task {
    /// A new, not-yet-done task
    pub fn new(description: impl Into<String>) -> Self {
        Task {
            description: description.into(),
            done: false,
        }
    }

    /// The mark shown inside the status brackets `[ ]`
    pub fn status_mark(&self) -> char {
        if self.done { '✓' } else { '✗' }
    }
}

impl Record for Task {
    const NOUN: &'static str = "task";

    fn label(&self) -> &str {
        &self.description
    }
}
