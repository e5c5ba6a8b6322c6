use parking_lot::Mutex;

use crate::clock::{Clock, SystemClock};
use crate::config::PlannerConfig;
use crate::storage::{FileStore, KeyValueStore, TaskStorage};
use crate::tasks::store::TaskStore;

pub struct AppState<S = FileStore, C = SystemClock> {
    pub tasks: Mutex<TaskStore<S, C>>,
    pub config: PlannerConfig,
}

impl AppState {
    /// File-backed state rooted at `config.data_dir`.
    pub fn open(config: PlannerConfig) -> Self {
        let backend = FileStore::new(config.data_dir.clone());
        Self::with_backend(config, backend, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> AppState<S, C> {
    pub fn with_backend(config: PlannerConfig, backend: S, clock: C) -> Self {
        let storage = TaskStorage::new(backend, config.storage_key.clone());
        Self {
            tasks: Mutex::new(TaskStore::open(storage, clock)),
            config,
        }
    }
}
