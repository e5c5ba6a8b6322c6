pub mod types;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::tasks::types::Task;
pub use types::{Board, TaskGroup};

/// Sorts and groups tasks for display.
///
/// Pending tasks come before completed ones. Inside each of those two runs,
/// tasks that carry a time are ordered by it while tasks without a time keep
/// their positions. Groups are keyed by task type and ordered
/// alphabetically, ignoring case and accents. Equal keys keep the order in
/// which they first appeared.
///
/// Accent folding strips every combining mark, so `ñ` sorts as `n` rather
/// than as the separate letter after `n` that Spanish collation uses.
pub fn arrange_for_display(tasks: &[Task]) -> Board {
    if tasks.is_empty() {
        return Board::Empty;
    }

    let mut groups: Vec<TaskGroup> = Vec::new();
    for task in sort_for_display(tasks) {
        let key = task.group_key().to_string();
        match groups.iter_mut().find(|g| g.key == key) {
            Some(group) => group.tasks.push(task),
            None => groups.push(TaskGroup {
                key,
                tasks: vec![task],
            }),
        }
    }

    groups.sort_by_cached_key(|g| collation_key(&g.key));
    Board::Groups(groups)
}

fn sort_for_display(tasks: &[Task]) -> Vec<Task> {
    let (mut pending, mut done): (Vec<Task>, Vec<Task>) =
        tasks.iter().cloned().partition(|t| !t.done);

    order_timed(&mut pending);
    order_timed(&mut done);

    pending.extend(done);
    pending
}

// Timed tasks are sorted among the slots they already occupy; untimed tasks
// have no defined order against them and stay put.
fn order_timed(tasks: &mut [Task]) {
    let slots: Vec<usize> = tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| sort_time(t).is_some())
        .map(|(i, _)| i)
        .collect();

    let mut timed: Vec<Task> = slots.iter().map(|&i| tasks[i].clone()).collect();
    timed.sort_by(|a, b| sort_time(a).cmp(&sort_time(b)));

    for (slot, task) in slots.into_iter().zip(timed) {
        tasks[slot] = task;
    }
}

fn sort_time(task: &Task) -> Option<&str> {
    task.time.as_deref().filter(|t| !t.is_empty())
}

fn collation_key(key: &str) -> String {
    key.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
