use serde::{Deserialize, Serialize};

use crate::task::TaskId;

pub type ColumnId = String;

/// The five workflow stages, in board order. Fixed for the lifetime of a
/// board; columns are never added or removed at runtime.
pub const STAGES: [(&str, &str); 5] = [
    ("backlog", "Backlog"),
    ("to-do", "To Do"),
    ("in-progress", "In Progress"),
    ("review", "Review"),
    ("done", "Done"),
];

/// Where new tasks land unless the creation form says otherwise.
pub const DEFAULT_COLUMN_ID: &str = "to-do";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub task_ids: Vec<TaskId>,
}

impl Column {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            task_ids: Vec::new(),
        }
    }
}
