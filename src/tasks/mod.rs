pub mod store;
pub mod types;

use crate::board::{arrange_for_display, Board};
use crate::clock::Clock;
use crate::error::AppError;
use crate::prompt::ConfirmPrompt;
use crate::state::AppState;
use crate::storage::KeyValueStore;
use types::{NewTask, Task, TaskId};

/// Adds a task from the form. `Ok(None)` means the title was blank.
pub fn create_task<S: KeyValueStore, C: Clock>(
    state: &AppState<S, C>,
    fields: NewTask,
) -> Result<Option<Task>, AppError> {
    state.tasks.lock().add(fields)
}

pub fn set_task_done<S: KeyValueStore, C: Clock>(
    state: &AppState<S, C>,
    task_id: TaskId,
    done: bool,
) -> Result<(), AppError> {
    state.tasks.lock().toggle_done(task_id, done)
}

pub fn delete_task<S: KeyValueStore, C: Clock>(
    state: &AppState<S, C>,
    task_id: TaskId,
    prompt: &mut impl ConfirmPrompt,
) -> Result<(), AppError> {
    state.tasks.lock().delete(task_id, prompt)
}

pub fn list_tasks<S: KeyValueStore, C: Clock>(state: &AppState<S, C>) -> Vec<Task> {
    state.tasks.lock().all().to_vec()
}

/// Current tasks arranged for display.
pub fn task_board<S: KeyValueStore, C: Clock>(state: &AppState<S, C>) -> Board {
    arrange_for_display(state.tasks.lock().all())
}
