pub mod board;
pub mod column;
pub mod task;

pub use board::Board;
pub use column::{Column, ColumnId, DEFAULT_COLUMN_ID, STAGES};
pub use task::{generate_task_id, Task, TaskId, TASK_ID_PREFIX};
