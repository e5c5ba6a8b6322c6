mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use tracing::warn;

use crate::error::AppError;
use crate::tasks::types::Task;

/// Persistent string slots addressed by key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Overwrites the whole slot.
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// Reads and writes the task list under one fixed key.
pub struct TaskStorage<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> TaskStorage<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Missing or unreadable data loads as an empty list.
    pub fn load(&self) -> Vec<Task> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read stored tasks");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!(key = %self.key, error = %e, "stored tasks are corrupt, starting empty");
                Vec::new()
            }
        }
    }

    pub fn save(&self, tasks: &[Task]) -> Result<(), AppError> {
        let json = serde_json::to_string(tasks)?;
        self.backend.set(&self.key, &json)
    }
}
