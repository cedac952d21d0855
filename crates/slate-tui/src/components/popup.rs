use crate::theme::{focused_border, popup_bg, unfocused_border};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Rect centered in `r`, sized as a percentage of it.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Clear the popup area and draw its outer block, returning the inner
/// rect for content.
pub fn render_popup_frame(frame: &mut Frame, title: &str, area: Rect) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(focused_border())
        .style(popup_bg());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// One-line text input with a border; the border marks focus. Returns
/// the rect the text occupies so the caller can place the cursor.
pub fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    text: &str,
    focused: bool,
) -> Rect {
    let border = if focused {
        focused_border()
    } else {
        unfocused_border()
    };
    let block = Block::default().borders(Borders::ALL).border_style(border);
    let inner = block.inner(area);
    let input = Paragraph::new(text.to_string())
        .style(crate::theme::normal_text())
        .block(block);
    frame.render_widget(input, area);
    inner
}
