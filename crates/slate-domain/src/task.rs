use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type TaskId = String;

pub const TASK_ID_PREFIX: &str = "task-";

/// A user-created work item. Immutable once created; there is no edit
/// operation, only deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub content: String,
}

impl Task {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: generate_task_id(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Prefixed, time-derived unique id, e.g. `task-1714659305123-9f3a61c2`.
/// The random suffix keeps ids distinct when two tasks are created in the
/// same millisecond.
pub fn generate_task_id() -> TaskId {
    let millis = Utc::now().timestamp_millis();
    let uuid = Uuid::new_v4().simple().to_string();
    format!("{}{}-{}", TASK_ID_PREFIX, millis, &uuid[..8])
}
