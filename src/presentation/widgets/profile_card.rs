use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::{
    domain::{Profile, SwipeDirection},
    presentation::{config::Styles, widgets::badges::Badges, widgets::shrink_text::ShrinkText},
};

const BIO_LINES: usize = 2;
const SLIDE_COLUMNS: u16 = 4;

/// Deck card for one profile. While a swipe is settling the card is tinted
/// and slid towards the swipe direction.
pub struct ProfileCard<'a> {
    profile: &'a Profile,
    leaving: Option<SwipeDirection>,
    styles: &'a Styles,
}

impl<'a> ProfileCard<'a> {
    pub fn new(profile: &'a Profile, styles: &'a Styles) -> Self {
        Self {
            profile,
            leaving: None,
            styles,
        }
    }

    pub fn leaving(mut self, direction: Option<SwipeDirection>) -> Self {
        self.leaving = direction;
        self
    }

    fn title(&self) -> Line<'a> {
        let mut spans = vec![Span::styled(
            format!(" {} ", self.profile.headline()),
            self.styles.get_or_default("title"),
        )];
        if self.profile.verified {
            spans.push(Span::styled("✓ ", self.styles.get_or_default("verified")));
        }
        Line::from(spans)
    }

    fn slid(&self, area: Rect) -> Rect {
        let shift = SLIDE_COLUMNS.min(area.width / 4);
        match self.leaving {
            Some(SwipeDirection::Like) => Rect {
                x: area.x + shift,
                width: area.width - shift,
                ..area
            },
            Some(SwipeDirection::Pass) => Rect {
                width: area.width - shift,
                ..area
            },
            None => area,
        }
    }
}

impl Widget for ProfileCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = self.slid(area);
        let (border_style, stamp) = match self.leaving {
            Some(SwipeDirection::Like) => (self.styles.get_or_default("like"), Some("LIKE")),
            Some(SwipeDirection::Pass) => (self.styles.get_or_default("pass"), Some("NOPE")),
            None => (self.styles.get_or_default("accent"), None),
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.title());
        if let Some(stamp) = stamp {
            block = block.title(Line::styled(format!(" {stamp} "), border_style).right_aligned());
        }
        let inner = block.inner(area);
        block.render(area, buf);

        let muted = self.styles.get_or_default("muted");
        let mut lines = vec![
            Line::styled(format!("🖼  {}", self.profile.image), muted),
            Line::from(format!("📍 {} km away", self.profile.distance_km)),
            Line::default(),
        ];
        let bio = ShrinkText::new(self.profile.bio.as_str(), inner.width as usize, BIO_LINES);
        lines.extend(bio.lines().into_iter().map(Line::from));
        lines.push(Line::default());

        let text_height = lines.len() as u16;
        Paragraph::new(lines).render(inner, buf);

        if inner.height > text_height {
            let badges_area = Rect {
                y: inner.y + text_height,
                height: inner.height - text_height,
                ..inner
            };
            Badges::new(&self.profile.interests)
                .style(self.styles.get_or_default("badge"))
                .render(badges_area, buf);
        }
    }
}
