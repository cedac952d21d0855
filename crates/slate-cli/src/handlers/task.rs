use crate::cli::{TaskAction, TaskAddArgs, TaskMoveArgs};
use crate::context::CliContext;
use crate::output::{output_error, output_list, output_success};
use serde::Serialize;
use slate_domain::Board;

#[derive(Serialize)]
struct TaskRow {
    id: String,
    title: String,
    content: String,
    column: String,
}

fn task_row(board: &Board, task_id: &str) -> Option<TaskRow> {
    let task = board.task(task_id)?;
    let (column_id, _) = board.locate_task(task_id)?;
    Some(TaskRow {
        id: task.id.clone(),
        title: task.title.clone(),
        content: task.content.clone(),
        column: column_id.clone(),
    })
}

pub async fn handle(ctx: &mut CliContext, action: TaskAction) -> anyhow::Result<()> {
    match action {
        TaskAction::Add(args) => handle_add(ctx, args).await,
        TaskAction::List { column } => handle_list(ctx, column),
        TaskAction::Move(args) => handle_move(ctx, args).await,
        TaskAction::Delete { id } => handle_delete(ctx, id).await,
    }
}

async fn handle_add(ctx: &mut CliContext, args: TaskAddArgs) -> anyhow::Result<()> {
    if ctx.board.column(&args.column).is_none() {
        output_error(&format!("unknown column '{}'", args.column));
    }

    match ctx.board.create_task(&args.title, &args.content, &args.column) {
        Some(next) => {
            // the new task was appended to the end of the target column
            let created = next
                .column(&args.column)
                .and_then(|column| column.task_ids.last())
                .and_then(|id| task_row(&next, id));
            ctx.commit(next).await?;
            match created {
                Some(row) => output_success(row),
                None => output_error("task was created but could not be read back"),
            }
        }
        None => output_error("title must not be empty"),
    }
    Ok(())
}

fn handle_list(ctx: &CliContext, column: Option<String>) -> anyhow::Result<()> {
    if let Some(ref column_id) = column {
        if ctx.board.column(column_id).is_none() {
            output_error(&format!("unknown column '{}'", column_id));
        }
    }

    let rows: Vec<TaskRow> = ctx
        .board
        .ordered_columns()
        .filter(|c| column.as_deref().map_or(true, |id| id == c.id))
        .flat_map(|c| c.task_ids.iter())
        .filter_map(|id| task_row(&ctx.board, id))
        .collect();
    output_list(rows);
    Ok(())
}

async fn handle_move(ctx: &mut CliContext, args: TaskMoveArgs) -> anyhow::Result<()> {
    let (source_column_id, source_index) = match ctx.board.locate_task(&args.id) {
        Some((column_id, index)) => (column_id.clone(), index),
        None => output_error(&format!("task '{}' not found", args.id)),
    };
    let dest_len = match ctx.board.column(&args.to) {
        Some(column) => column.task_ids.len(),
        None => output_error(&format!("unknown column '{}'", args.to)),
    };
    let dest_index = args.position.unwrap_or(dest_len);

    if let Some(next) = ctx.board.move_task(
        &args.id,
        &source_column_id,
        source_index,
        Some(&args.to),
        dest_index,
    ) {
        ctx.commit(next).await?;
    }
    // a no-op move (already in place) still reports the task
    match task_row(&ctx.board, &args.id) {
        Some(row) => output_success(row),
        None => output_error(&format!("task '{}' not found", args.id)),
    }
    Ok(())
}

async fn handle_delete(ctx: &mut CliContext, id: String) -> anyhow::Result<()> {
    let column_id = match ctx.board.locate_task(&id) {
        Some((column_id, _)) => column_id.clone(),
        None => output_error(&format!("task '{}' not found", id)),
    };
    let next = ctx.board.delete_task(&id, &column_id);
    ctx.commit(next).await?;
    output_success(serde_json::json!({ "deleted": id, "column": column_id }));
    Ok(())
}
