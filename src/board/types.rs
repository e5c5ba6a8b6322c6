use serde::Serialize;

use crate::tasks::types::Task;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TaskGroup {
    pub key: String,
    pub tasks: Vec<Task>,
}

impl TaskGroup {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn count_label(&self) -> String {
        format!("{} task(s)", self.tasks.len())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "groups", rename_all = "snake_case")]
pub enum Board {
    /// No tasks exist yet.
    Empty,
    Groups(Vec<TaskGroup>),
}

impl Board {
    pub const EMPTY_MESSAGE: &'static str =
        "You haven't added any tasks yet. Start by creating one with the form above.";

    pub fn groups(&self) -> &[TaskGroup] {
        match self {
            Board::Empty => &[],
            Board::Groups(groups) => groups,
        }
    }

    /// Tasks in display order.
    pub fn flatten(&self) -> impl Iterator<Item = &Task> {
        self.groups().iter().flat_map(|g| g.tasks.iter())
    }
}
