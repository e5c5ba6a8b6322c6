use serde::{Deserialize, Deserializer, Serialize};

pub type TaskId = i64;

pub const DEFAULT_TYPE: &str = "General";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(
        rename = "type",
        default = "default_kind",
        deserialize_with = "deserialize_kind"
    )]
    pub kind: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub done: bool,
}

impl Task {
    /// Copy of this task with the completion flag overridden.
    pub fn with_done(&self, done: bool) -> Self {
        Self {
            done,
            ..self.clone()
        }
    }

    /// Key used to group the task on the board.
    pub fn group_key(&self) -> &str {
        let kind = self.kind.trim();
        if kind.is_empty() {
            DEFAULT_TYPE
        } else {
            kind
        }
    }

    pub fn meta_parts(&self) -> Vec<String> {
        let mut parts = Vec::new();
        if let Some(time) = &self.time {
            parts.push(format!("Time: {time}"));
        }
        if let Some(date) = &self.date {
            parts.push(format!("Date: {date}"));
        }
        if let Some(quantity) = self.quantity {
            parts.push(format!("Quantity: {quantity}"));
        }
        parts
    }

    /// Meta facts joined for a single display line, `None` when there are none.
    pub fn meta_line(&self) -> Option<String> {
        let parts = self.meta_parts();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" · "))
        }
    }
}

fn default_kind() -> String {
    DEFAULT_TYPE.into()
}

fn deserialize_kind<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let kind = Option::<String>::deserialize(deserializer)?;
    Ok(non_blank(kind).unwrap_or_else(default_kind))
}

/// Fields of the "new task" form, as entered by the user.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewTask {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Builds the stored task, or `None` when the title is blank.
    pub(crate) fn into_task(self, id: TaskId) -> Option<Task> {
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }

        Some(Task {
            id,
            title: title.to_string(),
            kind: non_blank(Some(self.kind)).unwrap_or_else(default_kind),
            date: self.date.filter(|d| !d.is_empty()),
            time: self.time.filter(|t| !t.is_empty()),
            quantity: self.quantity,
            notes: non_blank(self.notes),
            done: false,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
