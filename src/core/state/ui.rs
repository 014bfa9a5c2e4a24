use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr, IntoEnumIterator};

use crate::core::{cmd::Cmd, msg::ui::UiMsg};

/// The three mutually exclusive views
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, FromRepr, Serialize, Deserialize,
)]
pub enum Tab {
    #[default]
    Discover,
    Matches,
    Profile,
}

impl Tab {
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn next(&self) -> Self {
        Self::from_repr((self.index() + 1) % Self::iter().count()).unwrap_or_default()
    }

    pub fn prev(&self) -> Self {
        let count = Self::iter().count();
        Self::from_repr((self.index() + count - 1) % count).unwrap_or_default()
    }
}

/// Modal dialogs; at most one is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialog {
    /// Read-only view of the current deck profile
    Detail,
    /// Filter/settings editor
    Filters,
}

/// UI-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub tab: Tab,
    pub dialog: Option<Dialog>,
    pub match_selection: Option<usize>,
}

impl UiState {
    pub fn is_dialog_open(&self, dialog: Dialog) -> bool {
        self.dialog == Some(dialog)
    }

    /// UI-specific update function
    /// Cross-slice rules (closing a dialog before a swipe, opening filters) live in the coordinator
    pub fn update(&mut self, msg: UiMsg) -> Vec<Cmd> {
        match msg {
            UiMsg::TabSelected(tab) => {
                self.tab = tab;
            }
            UiMsg::NextTabSelected => {
                self.tab = self.tab.next();
            }
            UiMsg::PrevTabSelected => {
                self.tab = self.tab.prev();
            }
            UiMsg::DialogOpened(dialog) => {
                self.dialog = Some(dialog);
            }
            UiMsg::DialogClosed | UiMsg::DetailSwiped(_) => {
                self.dialog = None;
            }
            UiMsg::NextMatchSelected { max_index } => {
                self.match_selection = Some(match self.match_selection {
                    Some(index) => (index + 1).min(max_index),
                    None => 0,
                });
            }
            UiMsg::PrevMatchSelected => {
                self.match_selection = self.match_selection.map(|index| index.saturating_sub(1));
            }
        }
        vec![]
    }
}
