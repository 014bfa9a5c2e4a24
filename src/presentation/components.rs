//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::core::state::{ui::Tab, AppState};

pub mod detail_dialog;
pub mod discover;
pub mod filter_dialog;
pub mod footer;
pub mod header;
pub mod matches;
pub mod profile;
pub mod toast;

pub use detail_dialog::DetailDialogComponent;
pub use discover::DiscoverComponent;
pub use filter_dialog::FilterDialogComponent;
pub use footer::FooterComponent;
pub use header::HeaderComponent;
pub use matches::MatchesComponent;
pub use profile::ProfileComponent;
pub use toast::ToastComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub header: HeaderComponent,
    pub discover: DiscoverComponent,
    pub matches: MatchesComponent,
    pub profile: ProfileComponent,
    pub detail_dialog: DetailDialogComponent,
    pub filter_dialog: FilterDialogComponent,
    pub toast: ToastComponent,
    pub footer: FooterComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the whole screen: header, active tab, footer, then overlays
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(3), // Title and tabs
                Constraint::Min(0),    // Active tab
                Constraint::Length(2), // Key hints and status message
            ])
            .split(area);

        self.header.view(state, frame, layout[0]);
        match state.ui.tab {
            Tab::Discover => self.discover.view(state, frame, layout[1]),
            Tab::Matches => self.matches.view(state, frame, layout[1]),
            Tab::Profile => self.profile.view(state, frame, layout[1]),
        }
        self.footer.view(state, frame, layout[2]);

        self.detail_dialog.view(state, frame, layout[1]);
        self.filter_dialog.view(state, frame, layout[1]);
        self.toast.view(state, frame, layout[1]);
    }
}

/// Rect of at most `width` x `height` centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    /// Draws with `view` on a fresh test terminal and returns the screen rows
    pub fn render_rows(width: u16, height: u16, view: impl FnOnce(&mut Frame)) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal.draw(view).expect("draw");
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    pub fn render_screen(width: u16, height: u16, view: impl FnOnce(&mut Frame)) -> String {
        render_rows(width, height, view).join("\n")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{test_support::render_screen, *};
    use crate::core::state::ui::Dialog;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);

        assert_eq!(centered_rect(60, 20, area), Rect::new(20, 10, 60, 20));
        assert_eq!(centered_rect(200, 80, area), area);
    }

    #[test]
    fn test_renders_active_tab_between_header_and_footer() {
        let state = AppState::default();

        let screen = render_screen(80, 24, |frame| Components::new().render(frame, &state));

        assert!(screen.contains("LoveMatch"));
        assert!(screen.contains("Anna, 25"));
        assert!(screen.contains("q quit"));
    }

    #[test]
    fn test_dialog_is_drawn_over_the_tab() {
        let mut state = AppState::default();
        state.ui.dialog = Some(Dialog::Detail);

        let screen = render_screen(80, 30, |frame| Components::new().render(frame, &state));

        assert!(screen.contains("Esc close"));
    }
}
