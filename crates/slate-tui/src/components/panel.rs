use crate::theme::{focused_border, unfocused_border};
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Bordered panel whose border reflects focus.
pub struct PanelConfig {
    pub title: String,
    pub is_focused: bool,
}

impl PanelConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }

    pub fn block(&self) -> Block<'_> {
        let border_style = if self.is_focused {
            focused_border()
        } else {
            unfocused_border()
        };
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.title.as_str())
    }
}

pub fn render_panel(frame: &mut Frame, area: Rect, config: &PanelConfig, lines: Vec<Line<'_>>) {
    let widget = Paragraph::new(lines).block(config.block());
    frame.render_widget(widget, area);
}
