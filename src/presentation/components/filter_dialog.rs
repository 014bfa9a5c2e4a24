//! Filter dialog component
//!
//! Edits the filter draft: age range, maximum distance and verified-only.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{
        filter::{FilterDraft, FilterField},
        ui::Dialog,
        AppState,
    },
    domain::filter::{AGE_BOUNDS, DISTANCE_BOUNDS},
    presentation::{components::centered_rect, widgets::range_slider::RangeSlider},
};

#[derive(Debug, Clone, Default)]
pub struct FilterDialogComponent;

impl FilterDialogComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        if !state.ui.is_dialog_open(Dialog::Filters) {
            return;
        }
        let styles = &state.config.config.styles;
        let draft = state.filter.draft().copied().unwrap_or(FilterDraft {
            settings: *state.filter.applied(),
            focus: FilterField::default(),
        });
        let settings = draft.settings;
        let focused = styles.get_or_default("selected");
        let mark = |field: FilterField| {
            if draft.focus == field {
                focused
            } else {
                Style::default()
            }
        };

        let area = centered_rect(56, 14, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles.get_or_default("accent"))
            .padding(Padding::horizontal(1))
            .title(" Search filters ")
            .title_bottom(Line::from(" Enter apply · Esc cancel ").centered());
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        let [age_label, age_slider, _, distance_label, distance_slider, _, verified, _, hints] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .areas(inner);

        let age = settings.age_range;
        frame.render_widget(
            Line::from(vec![
                Span::raw("Age: "),
                Span::styled(age.min().to_string(), mark(FilterField::AgeMin)),
                Span::raw(" - "),
                Span::styled(age.max().to_string(), mark(FilterField::AgeMax)),
                Span::raw(" years"),
            ]),
            age_label,
        );
        frame.render_widget(
            RangeSlider::range(
                u32::from(*AGE_BOUNDS.start())..=u32::from(*AGE_BOUNDS.end()),
                u32::from(age.min()),
                u32::from(age.max()),
            )
            .fill_style(styles.get_or_default("gauge")),
            age_slider,
        );

        frame.render_widget(
            Line::from(vec![
                Span::raw("Maximum distance: "),
                Span::styled(settings.max_distance_km().to_string(), mark(FilterField::MaxDistance)),
                Span::raw(" km"),
            ]),
            distance_label,
        );
        frame.render_widget(
            RangeSlider::single(DISTANCE_BOUNDS, settings.max_distance_km())
                .fill_style(styles.get_or_default("gauge")),
            distance_slider,
        );

        let checkbox = if settings.verified_only { "[x]" } else { "[ ]" };
        frame.render_widget(
            Line::from(vec![
                Span::styled(checkbox, mark(FilterField::VerifiedOnly)),
                Span::raw(" Verified only"),
            ]),
            verified,
        );

        frame.render_widget(
            Line::styled(
                "↑↓ field · ←→ adjust (shift ±5) · space toggle",
                styles.get_or_default("muted"),
            ),
            hints,
        );
    }
}
