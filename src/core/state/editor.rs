use serde::{Deserialize, Serialize};

use crate::{
    core::{cmd::Cmd, msg::editor::EditorMsg, textarea_engine::TextAreaEngine},
    domain::UserProfile,
};

/// Cursor position within a multi-line text buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

/// Snapshot of a textarea: content plus cursor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAreaState {
    pub content: String,
    pub cursor_position: CursorPosition,
}

impl TextAreaState {
    pub fn new(content: String, cursor_position: CursorPosition) -> Self {
        Self {
            content,
            cursor_position,
        }
    }

    /// Snapshot with the cursor placed after the last character
    pub fn with_cursor_at_end(content: String) -> Self {
        let line = content.lines().count().saturating_sub(1);
        let column = content
            .lines()
            .last()
            .map(|l| l.chars().count())
            .unwrap_or(0);
        Self::new(content, CursorPosition { line, column })
    }
}

/// What the profile tab is currently doing with the keyboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    Browsing,
    EditingBio,
    /// Inline "add interest" input with its buffer
    AddingInterest(String),
}

/// State of the local user's profile editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    profile: UserProfile,
    bio: TextAreaState,
    mode: EditorMode,
    selected_interest: Option<usize>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(UserProfile::default())
    }
}

impl EditorState {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            bio: TextAreaState::with_cursor_at_end(profile.bio.clone()),
            selected_interest: (!profile.interests.is_empty()).then_some(0),
            profile,
            mode: EditorMode::Browsing,
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn bio(&self) -> &TextAreaState {
        &self.bio
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_editing_bio(&self) -> bool {
        self.mode == EditorMode::EditingBio
    }

    pub fn is_adding_interest(&self) -> bool {
        matches!(self.mode, EditorMode::AddingInterest(_))
    }

    /// Whether keys should go to a text input instead of the keybindings
    pub fn is_capturing_input(&self) -> bool {
        self.mode != EditorMode::Browsing
    }

    pub fn pending_interest(&self) -> Option<&str> {
        match &self.mode {
            EditorMode::AddingInterest(buffer) => Some(buffer),
            _ => None,
        }
    }

    pub fn selected_interest(&self) -> Option<usize> {
        self.selected_interest
    }

    /// Editor-specific update function
    /// Key input for the bio goes through `engine` so this stays free of terminal state
    pub fn update(&mut self, msg: EditorMsg, engine: &dyn TextAreaEngine) -> Vec<Cmd> {
        match msg {
            EditorMsg::BioEditStarted => {
                self.bio = TextAreaState::with_cursor_at_end(self.profile.bio.clone());
                self.mode = EditorMode::EditingBio;
            }

            EditorMsg::BioEditFinished => {
                if self.is_editing_bio() {
                    self.mode = EditorMode::Browsing;
                }
            }

            EditorMsg::BioInput(key) => {
                if self.is_editing_bio() {
                    self.bio = engine.apply_keys(&self.bio, &[key]);
                    self.profile.set_bio(self.bio.content.clone());
                }
            }

            EditorMsg::NextInterestSelected => {
                let len = self.profile.interests.len();
                self.selected_interest = match self.selected_interest {
                    _ if len == 0 => None,
                    Some(i) => Some((i + 1).min(len - 1)),
                    None => Some(0),
                };
            }

            EditorMsg::PrevInterestSelected => {
                self.selected_interest = self.selected_interest.map(|i| i.saturating_sub(1));
            }

            EditorMsg::InterestRemoved => {
                if let Some(index) = self.selected_interest {
                    if let Some(removed) = self.profile.remove_interest(index) {
                        log::info!("interest removed: {removed}");
                    }
                    self.clamp_selection();
                }
            }

            EditorMsg::InterestInputStarted => {
                self.mode = EditorMode::AddingInterest(String::new());
            }

            EditorMsg::InterestInputChar(c) => {
                if let EditorMode::AddingInterest(buffer) = &mut self.mode {
                    buffer.push(c);
                }
            }

            EditorMsg::InterestInputBackspace => {
                if let EditorMode::AddingInterest(buffer) = &mut self.mode {
                    buffer.pop();
                }
            }

            EditorMsg::InterestInputCommitted => {
                if let Some(buffer) = self.pending_interest().map(str::to_owned) {
                    self.mode = EditorMode::Browsing;
                    if self.profile.add_interest(&buffer) {
                        log::info!("interest added: {}", buffer.trim());
                        self.selected_interest = Some(self.profile.interests.len() - 1);
                    }
                }
            }

            EditorMsg::InterestInputCancelled => {
                if self.is_adding_interest() {
                    self.mode = EditorMode::Browsing;
                }
            }
        }
        vec![]
    }

    fn clamp_selection(&mut self) {
        let len = self.profile.interests.len();
        self.selected_interest = match self.selected_interest {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => None,
        };
    }
}
