use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::column::{Column, ColumnId, STAGES};
use crate::task::{Task, TaskId};

/// The entire application state: tasks by id, columns by id, and the
/// column display order. Serialized with camelCase keys (`columnOrder`,
/// `taskIds`); this is the exact shape of the file on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub tasks: HashMap<TaskId, Task>,
    pub columns: HashMap<ColumnId, Column>,
    pub column_order: Vec<ColumnId>,
}

impl Default for Board {
    fn default() -> Self {
        let mut columns = HashMap::new();
        let mut column_order = Vec::with_capacity(STAGES.len());
        for (id, title) in STAGES {
            columns.insert(id.to_string(), Column::new(id, title));
            column_order.push(id.to_string());
        }
        Self {
            tasks: HashMap::new(),
            columns,
            column_order,
        }
    }
}

impl Board {
    /// Columns in display order.
    pub fn ordered_columns(&self) -> impl Iterator<Item = &Column> {
        self.column_order
            .iter()
            .filter_map(|id| self.columns.get(id))
    }

    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.get(id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    /// Find the column holding `task_id` and the task's index within it.
    pub fn locate_task(&self, task_id: &str) -> Option<(&ColumnId, usize)> {
        self.column_order.iter().find_map(|column_id| {
            let column = self.columns.get(column_id)?;
            column
                .task_ids
                .iter()
                .position(|id| id == task_id)
                .map(|index| (column_id, index))
        })
    }

    /// Create a task and append it to the end of `column_id`.
    ///
    /// Returns the next board, or `None` when the title is empty after
    /// trimming or the column id is unknown. A `None` means nothing
    /// changed and nothing should be persisted.
    pub fn create_task(&self, title: &str, content: &str, column_id: &str) -> Option<Board> {
        if title.trim().is_empty() {
            return None;
        }
        if !self.columns.contains_key(column_id) {
            return None;
        }

        let task = Task::new(title, content);
        let mut next = self.clone();
        next.columns
            .get_mut(column_id)?
            .task_ids
            .push(task.id.clone());
        next.tasks.insert(task.id.clone(), task);
        Some(next)
    }

    /// Remove a task from `tasks` and from `column_id` in one step.
    /// Unknown ids filter to nothing; the result is then identical to the
    /// current board.
    pub fn delete_task(&self, task_id: &str, column_id: &str) -> Board {
        let mut next = self.clone();
        next.tasks.remove(task_id);
        if let Some(column) = next.columns.get_mut(column_id) {
            column.task_ids.retain(|id| id != task_id);
        }
        next
    }

    /// Apply a completed drag gesture.
    ///
    /// `dest_column_id` is `None` when the gesture ended outside any
    /// column; that and a same-column same-index drop are no-ops. A
    /// same-column move removes the id first and inserts into the
    /// shortened list, so a rightward destination index lands one slot
    /// earlier than its pre-removal position — the splice semantics the
    /// board has always had. The destination index is clamped to the
    /// target list length; a source index that does not hold `task_id`
    /// is rejected.
    pub fn move_task(
        &self,
        task_id: &str,
        source_column_id: &str,
        source_index: usize,
        dest_column_id: Option<&str>,
        dest_index: usize,
    ) -> Option<Board> {
        let dest_column_id = dest_column_id?;
        if source_column_id == dest_column_id && source_index == dest_index {
            return None;
        }

        let source = self.columns.get(source_column_id)?;
        if source.task_ids.get(source_index).map(String::as_str) != Some(task_id) {
            return None;
        }

        let mut next = self.clone();
        if source_column_id == dest_column_id {
            let column = next.columns.get_mut(source_column_id)?;
            let id = column.task_ids.remove(source_index);
            let index = dest_index.min(column.task_ids.len());
            column.task_ids.insert(index, id);
        } else {
            let index = dest_index.min(self.columns.get(dest_column_id)?.task_ids.len());
            let id = next
                .columns
                .get_mut(source_column_id)?
                .task_ids
                .remove(source_index);
            next.columns
                .get_mut(dest_column_id)?
                .task_ids
                .insert(index, id);
        }
        Some(next)
    }

    /// Check the referential invariants: every id in a column's list
    /// exists in `tasks`, appears in exactly one column at exactly one
    /// position, and no task is left unreferenced.
    pub fn verify_integrity(&self) -> Result<(), String> {
        let mut owner: HashMap<&str, &str> = HashMap::new();
        for column in self.columns.values() {
            for task_id in &column.task_ids {
                if !self.tasks.contains_key(task_id) {
                    return Err(format!(
                        "column '{}' references unknown task '{}'",
                        column.id, task_id
                    ));
                }
                if let Some(other) = owner.insert(task_id, &column.id) {
                    return Err(format!(
                        "task '{}' appears in '{}' and '{}'",
                        task_id, other, column.id
                    ));
                }
            }
        }
        for task_id in self.tasks.keys() {
            if !owner.contains_key(task_id.as_str()) {
                return Err(format!("task '{}' is not referenced by any column", task_id));
            }
        }
        Ok(())
    }
}
