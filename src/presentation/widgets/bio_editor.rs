use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Widget},
};

use crate::{core::state::editor::TextAreaState, infrastructure::tui::textarea_engine::TuiTextAreaEngine};

/// Multi-line bio input drawn from the editor snapshot
pub struct BioEditorWidget<'a> {
    bio: &'a TextAreaState,
    border_style: Style,
}

impl<'a> BioEditorWidget<'a> {
    pub fn new(bio: &'a TextAreaState) -> Self {
        Self {
            bio,
            border_style: Style::default(),
        }
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }
}

impl Widget for BioEditorWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut textarea = TuiTextAreaEngine::hydrate(self.bio);
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.border_style)
                .title("Bio (Esc: done)"),
        );
        textarea.set_cursor_line_style(Style::default());
        Widget::render(&textarea, area, buf);
    }
}
