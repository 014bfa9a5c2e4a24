use std::borrow::Cow;

use ratatui::text::{Line, Text};

use crate::domain::text;

/// Word-wrapped text limited to `max_height` lines, ellipsized where it was cut
#[derive(Clone, Debug, Default)]
pub struct ShrinkText<'a> {
    pub content: Cow<'a, str>,
    pub width: usize,
    pub max_height: usize,
}

impl<'a> ShrinkText<'a> {
    pub fn new<T>(content: T, width: usize, max_height: usize) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        Self {
            content: content.into(),
            width,
            max_height,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        text::clamp_lines(&self.content, self.width, self.max_height)
    }
}

impl<'a> From<ShrinkText<'a>> for Text<'a> {
    fn from(value: ShrinkText) -> Self {
        Text::from(value.lines().into_iter().map(Line::from).collect::<Vec<_>>())
    }
}
