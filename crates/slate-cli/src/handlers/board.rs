use crate::context::CliContext;
use crate::output::output_list;
use serde::Serialize;

#[derive(Serialize)]
struct ColumnSummary {
    id: String,
    title: String,
    count: usize,
}

pub fn handle_show(ctx: &CliContext) {
    let summaries: Vec<ColumnSummary> = ctx
        .board
        .ordered_columns()
        .map(|column| ColumnSummary {
            id: column.id.clone(),
            title: column.title.clone(),
            count: column.task_ids.len(),
        })
        .collect();
    output_list(summaries);
}
