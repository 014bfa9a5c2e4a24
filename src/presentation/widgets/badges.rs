use ratatui::{
    prelude::*,
    widgets::{Paragraph, Widget, Wrap},
};

/// Interest tags rendered as padded chips, wrapping onto further rows
#[derive(Clone, Debug)]
pub struct Badges<'a> {
    items: &'a [String],
    style: Style,
    selected: Option<usize>,
    selected_style: Style,
}

impl<'a> Badges<'a> {
    pub fn new(items: &'a [String]) -> Self {
        Self {
            items,
            style: Style::default().reversed(),
            selected: None,
            selected_style: Style::default().bold().reversed(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn selected(mut self, selected: Option<usize>, style: Style) -> Self {
        self.selected = selected;
        self.selected_style = style;
        self
    }

    pub fn line(&self) -> Line<'a> {
        let spans = self.items.iter().enumerate().flat_map(|(i, item)| {
            let style = if self.selected == Some(i) {
                self.selected_style
            } else {
                self.style
            };
            [Span::styled(format!(" {item} "), style), Span::raw(" ")]
        });
        Line::from(spans.collect::<Vec<_>>())
    }
}

impl Widget for Badges<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line())
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
