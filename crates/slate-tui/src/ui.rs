use crate::app::{App, AppMode};
use crate::components::popup::{render_input_field, render_popup_frame};
use crate::components::{centered_rect, render_panel, PanelConfig};
use crate::dialog::FormField;
use crate::theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    render_columns(app, frame, chunks[0]);
    render_footer(app, frame, chunks[1]);

    if app.mode == AppMode::CreateTask {
        render_create_task_popup(app, frame);
    }
}

fn render_columns(app: &App, frame: &mut Frame, area: Rect) {
    let count = app.board.column_order.len().max(1) as u32;
    let constraints: Vec<Constraint> = (0..count)
        .map(|_| Constraint::Ratio(1, count))
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (position, column) in app.board.ordered_columns().enumerate() {
        let Some(&chunk) = chunks.get(position) else {
            break;
        };
        let focused = position == app.focused_column;

        let mut lines = Vec::new();
        for (index, task_id) in column.task_ids.iter().enumerate() {
            let Some(task) = app.board.task(task_id) else {
                continue;
            };
            let selected = focused && app.card_selection.is_selected(index);
            lines.push(Line::from(Span::styled(
                format!(" {} ", task.title),
                theme::normal_text().patch(theme::selected_item(selected)),
            )));
            if !task.content.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("   {}", task.content),
                    theme::label_text(),
                )));
            }
        }
        if column.task_ids.is_empty() {
            lines.push(Line::from(Span::styled(" (empty)", theme::label_text())));
        }

        let config = PanelConfig::new(format!(
            "{} ({})",
            column.title,
            column.task_ids.len()
        ))
        .focused(focused);
        render_panel(frame, chunk, &config, lines);
    }
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let hints = match app.mode {
        AppMode::Normal => {
            "n new | d delete | j/k select | h/l column | J/K reorder | H/L send | q quit"
        }
        AppMode::CreateTask => "Tab next field | Enter create | Esc cancel",
    };
    let footer = Paragraph::new(Line::from(Span::styled(hints, theme::label_text())))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn render_create_task_popup(app: &App, frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());
    let inner = render_popup_frame(frame, "Create Task", area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // title label
            Constraint::Length(3), // title input
            Constraint::Length(1), // description label
            Constraint::Length(3), // description input
            Constraint::Length(1), // column label
            Constraint::Length(1), // column selector
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.form;

    frame.render_widget(
        Paragraph::new("Title").style(theme::highlight_text()),
        chunks[0],
    );
    let title_rect = render_input_field(
        frame,
        chunks[1],
        form.title.as_str(),
        form.field == FormField::Title,
    );

    frame.render_widget(
        Paragraph::new("Description").style(theme::highlight_text()),
        chunks[2],
    );
    let content_rect = render_input_field(
        frame,
        chunks[3],
        form.content.as_str(),
        form.field == FormField::Content,
    );

    frame.render_widget(
        Paragraph::new("Column").style(theme::highlight_text()),
        chunks[4],
    );
    let column_title = app
        .board
        .column(form.selected_column(&app.board))
        .map(|column| column.title.as_str())
        .unwrap_or("?");
    let selector_style = if form.field == FormField::Column {
        theme::highlight_text()
    } else {
        theme::normal_text()
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("< {} >", column_title),
            selector_style,
        ))),
        chunks[5],
    );

    match form.field {
        FormField::Title => {
            frame.set_cursor_position((
                title_rect.x + form.title.cursor_chars() as u16,
                title_rect.y,
            ));
        }
        FormField::Content => {
            frame.set_cursor_position((
                content_rect.x + form.content.cursor_chars() as u16,
                content_rect.y,
            ));
        }
        FormField::Column => {}
    }
}
