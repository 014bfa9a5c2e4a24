use std::ops::RangeInclusive;

use ratatui::{prelude::*, widgets::Widget};

const TRACK: &str = "─";
const FILL: &str = "━";
const THUMB: &str = "●";

/// One-line slider track. With a lower thumb it draws a range, otherwise
/// a single value filled from the start of the track.
#[derive(Clone, Debug)]
pub struct RangeSlider {
    bounds: RangeInclusive<u32>,
    low: Option<u32>,
    high: u32,
    track_style: Style,
    fill_style: Style,
    thumb_style: Style,
}

impl RangeSlider {
    pub fn single(bounds: RangeInclusive<u32>, value: u32) -> Self {
        Self {
            bounds,
            low: None,
            high: value,
            track_style: Style::default().dark_gray(),
            fill_style: Style::default(),
            thumb_style: Style::default().bold(),
        }
    }

    pub fn range(bounds: RangeInclusive<u32>, low: u32, high: u32) -> Self {
        Self {
            low: Some(low),
            ..Self::single(bounds, high)
        }
    }

    pub fn fill_style(mut self, style: Style) -> Self {
        self.fill_style = style;
        self
    }

    pub fn thumb_style(mut self, style: Style) -> Self {
        self.thumb_style = style;
        self
    }

    /// Column of `value` on a track `width` cells wide
    fn column(&self, value: u32, width: usize) -> usize {
        let (start, end) = (*self.bounds.start(), *self.bounds.end());
        if width <= 1 || end <= start {
            return 0;
        }
        let offset = u64::from(value.clamp(start, end) - start);
        let span = u64::from(end - start);
        let last = (width - 1) as u64;
        ((offset * last + span / 2) / span) as usize
    }

    pub fn line(&self, width: usize) -> Line<'static> {
        let high = self.column(self.high, width);
        let low = self.low.map(|low| self.column(low, width));
        let fill_from = low.unwrap_or(0);

        let spans = (0..width).map(|col| {
            if col == high || Some(col) == low {
                Span::styled(THUMB, self.thumb_style)
            } else if col < high && (low.is_none() || col > fill_from) {
                Span::styled(FILL, self.fill_style)
            } else {
                Span::styled(TRACK, self.track_style)
            }
        });
        Line::from(spans.collect::<Vec<_>>())
    }
}

impl Widget for RangeSlider {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.line(area.width as usize).render(area, buf);
    }
}
