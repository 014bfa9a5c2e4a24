use crate::{
    core::{cmd::Cmd, msg::filter::FilterMsg},
    domain::{FilterSettings, Notification},
};

/// Controls of the filter dialog, in focus order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FilterField {
    #[default]
    AgeMin,
    AgeMax,
    MaxDistance,
    VerifiedOnly,
}

impl FilterField {
    const ORDER: [FilterField; 4] = [
        FilterField::AgeMin,
        FilterField::AgeMax,
        FilterField::MaxDistance,
        FilterField::VerifiedOnly,
    ];

    fn position(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Settings being edited in the open dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterDraft {
    pub settings: FilterSettings,
    pub focus: FilterField,
}

/// Applied filter settings plus the draft of the open dialog
///
/// Edits only ever touch the draft; `Applied` is the only path into `applied`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    applied: FilterSettings,
    draft: Option<FilterDraft>,
    toast_ms: u64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(FilterSettings::default(), 5000)
    }
}

impl FilterState {
    pub fn new(applied: FilterSettings, toast_ms: u64) -> Self {
        Self {
            applied,
            draft: None,
            toast_ms,
        }
    }

    pub fn applied(&self) -> &FilterSettings {
        &self.applied
    }

    pub fn draft(&self) -> Option<&FilterDraft> {
        self.draft.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Filter-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: FilterMsg) -> Vec<Cmd> {
        match msg {
            FilterMsg::Opened => {
                self.draft = Some(FilterDraft {
                    settings: self.applied,
                    focus: FilterField::default(),
                });
                vec![]
            }

            FilterMsg::FocusNext => {
                if let Some(draft) = &mut self.draft {
                    draft.focus = draft.focus.next();
                }
                vec![]
            }

            FilterMsg::FocusPrev => {
                if let Some(draft) = &mut self.draft {
                    draft.focus = draft.focus.prev();
                }
                vec![]
            }

            FilterMsg::Adjusted(delta) => {
                if let Some(draft) = &mut self.draft {
                    let settings = &mut draft.settings;
                    match draft.focus {
                        FilterField::AgeMin => {
                            let min = step(u32::from(settings.age_range.min()), delta);
                            settings.age_range.set_min(saturate_u8(min));
                        }
                        FilterField::AgeMax => {
                            let max = step(u32::from(settings.age_range.max()), delta);
                            settings.age_range.set_max(saturate_u8(max));
                        }
                        FilterField::MaxDistance => {
                            settings.set_max_distance(step(settings.max_distance_km(), delta));
                        }
                        FilterField::VerifiedOnly => {
                            if delta != 0 {
                                settings.verified_only = !settings.verified_only;
                            }
                        }
                    }
                }
                vec![]
            }

            FilterMsg::Toggled => {
                if let Some(draft) = &mut self.draft {
                    if draft.focus == FilterField::VerifiedOnly {
                        draft.settings.verified_only = !draft.settings.verified_only;
                    }
                }
                vec![]
            }

            FilterMsg::Applied => match self.draft.take() {
                Some(draft) => {
                    self.applied = draft.settings;
                    log::info!("filters applied: {:?}", self.applied);
                    vec![Cmd::Notify(Notification::filters_applied(self.toast_ms))]
                }
                None => vec![],
            },

            FilterMsg::Cancelled => {
                self.draft = None;
                vec![]
            }
        }
    }
}

fn step(value: u32, delta: i32) -> u32 {
    value.saturating_add_signed(delta)
}

fn saturate_u8(value: u32) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}
