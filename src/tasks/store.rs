use tracing::{debug, info, warn};

use super::types::{NewTask, Task, TaskId};
use crate::clock::Clock;
use crate::error::AppError;
use crate::prompt::{ConfirmPrompt, DELETE_CONFIRMATION};
use crate::storage::{KeyValueStore, TaskStorage};

/// Owner of the task list. Every mutation is written through to storage.
pub struct TaskStore<S, C> {
    storage: TaskStorage<S>,
    clock: C,
    tasks: Vec<Task>,
}

impl<S: KeyValueStore, C: Clock> TaskStore<S, C> {
    pub fn open(storage: TaskStorage<S>, clock: C) -> Self {
        let tasks = storage.load();
        info!(key = storage.key(), count = tasks.len(), "opened task store");
        Self {
            storage,
            clock,
            tasks,
        }
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends a task built from form fields. A blank title creates nothing
    /// and returns `Ok(None)`, as does an exhausted id space.
    pub fn add(&mut self, fields: NewTask) -> Result<Option<Task>, AppError> {
        let Some(id) = self.next_id() else {
            warn!("no task id left above the largest stored id");
            return Ok(None);
        };
        let Some(task) = fields.into_task(id) else {
            debug!("rejected task with blank title");
            return Ok(None);
        };

        debug!(id = task.id, kind = %task.kind, "adding task");
        self.tasks.push(task.clone());
        self.storage.save(&self.tasks)?;
        Ok(Some(task))
    }

    /// Sets the completion flag. Unknown ids are ignored.
    pub fn toggle_done(&mut self, id: TaskId, done: bool) -> Result<(), AppError> {
        let mut toggled = 0;
        for task in self.tasks.iter_mut().filter(|t| t.id == id) {
            *task = task.with_done(done);
            toggled += 1;
        }
        debug!(id, done, toggled, "toggled task");
        self.storage.save(&self.tasks)
    }

    /// Removes a task once the user confirms. Unknown ids are ignored.
    pub fn delete(
        &mut self,
        id: TaskId,
        prompt: &mut impl ConfirmPrompt,
    ) -> Result<(), AppError> {
        if !prompt.confirm(DELETE_CONFIRMATION) {
            debug!(id, "delete declined");
            return Ok(());
        }

        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        debug!(id, removed = before - self.tasks.len(), "deleted task");
        self.storage.save(&self.tasks)
    }

    // Timestamp-derived, but never at or below an id already in the list.
    fn next_id(&self) -> Option<TaskId> {
        let now = self.clock.now_millis();
        match self.tasks.iter().map(|t| t.id).max() {
            Some(max) if max >= now => max.checked_add(1),
            _ => Some(now),
        }
    }
}
