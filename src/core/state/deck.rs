use crate::{
    core::{cmd::Cmd, msg::deck::DeckMsg},
    domain::{Notification, Profile, SwipeDirection},
};

/// Timing knobs for the deck, taken from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckSettings {
    pub swipe_delay_ms: u64,
    pub like_toast_ms: u64,
    pub deck_end_toast_ms: u64,
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            swipe_delay_ms: 300,
            like_toast_ms: 2000,
            deck_end_toast_ms: 3000,
        }
    }
}

/// In-flight swipe animation, tagged with the generation that scheduled it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeTransition {
    pub direction: SwipeDirection,
    pub generation: u64,
}

/// Deck cursor, swipe transition and the liked list
///
/// Invariant: `cursor < profiles.len()` whenever the deck is non-empty, and `0` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckState {
    profiles: Vec<Profile>,
    cursor: usize,
    transition: Option<SwipeTransition>,
    generation: u64,
    liked: Vec<Profile>,
    settings: DeckSettings,
}

impl Default for DeckState {
    fn default() -> Self {
        Self::new(vec![], DeckSettings::default())
    }
}

impl DeckState {
    pub fn new(profiles: Vec<Profile>, settings: DeckSettings) -> Self {
        Self {
            profiles,
            cursor: 0,
            transition: None,
            generation: 0,
            liked: vec![],
            settings,
        }
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Profile under the cursor, if the deck has any
    pub fn current(&self) -> Option<&Profile> {
        self.profiles.get(self.cursor)
    }

    pub fn transition(&self) -> Option<SwipeTransition> {
        self.transition
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Liked profiles in the order they were liked; duplicates are kept
    pub fn liked(&self) -> &[Profile] {
        &self.liked
    }

    pub fn settings(&self) -> DeckSettings {
        self.settings
    }

    /// Deck-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: DeckMsg) -> Vec<Cmd> {
        match msg {
            DeckMsg::Swipe(direction) => {
                let Some(profile) = self.current().cloned() else {
                    log::debug!("swipe ignored: deck is empty");
                    return vec![];
                };

                let mut cmds = vec![];
                if direction.is_like() {
                    log::info!("liked profile {} ({})", profile.id, profile.name);
                    cmds.push(Cmd::Notify(Notification::like_sent(
                        &profile,
                        self.settings.like_toast_ms,
                    )));
                    self.liked.push(profile);
                }

                // A newer swipe supersedes whatever transition is still pending
                self.generation += 1;
                self.transition = Some(SwipeTransition {
                    direction,
                    generation: self.generation,
                });
                cmds.push(Cmd::ScheduleSwipeSettle {
                    generation: self.generation,
                    delay_ms: self.settings.swipe_delay_ms,
                });
                cmds
            }

            DeckMsg::SwipeSettled { generation } => {
                match self.transition {
                    Some(transition) if transition.generation == generation => {}
                    _ => {
                        log::debug!("stale swipe transition {generation} ignored");
                        return vec![];
                    }
                }

                self.transition = None;
                if self.cursor + 1 < self.profiles.len() {
                    self.cursor += 1;
                    vec![]
                } else {
                    self.cursor = 0;
                    log::info!("deck exhausted, wrapping to the first profile");
                    vec![Cmd::Notify(Notification::deck_exhausted(
                        self.settings.deck_end_toast_ms,
                    ))]
                }
            }

            DeckMsg::ProfilesReplaced(profiles) => {
                log::info!("deck replaced with {} profiles", profiles.len());
                self.profiles = profiles;
                self.cursor = 0;
                self.transition = None;
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;
    use crate::domain::{NotificationKind, ProfileProvider, SeedProfiles};

    #[fixture]
    fn deck() -> DeckState {
        DeckState::new(SeedProfiles.profiles(), DeckSettings::default())
    }

    fn scheduled_generation(cmds: &[Cmd]) -> u64 {
        cmds.iter()
            .find_map(|cmd| match cmd {
                Cmd::ScheduleSwipeSettle { generation, .. } => Some(*generation),
                _ => None,
            })
            .expect("swipe should schedule a settle")
    }

    fn notifications(cmds: &[Cmd]) -> Vec<NotificationKind> {
        cmds.iter()
            .filter_map(|cmd| match cmd {
                Cmd::Notify(notification) => Some(notification.kind),
                _ => None,
            })
            .collect()
    }

    /// Swipe and let the transition elapse; returns every command produced
    fn swipe_and_settle(deck: &mut DeckState, direction: SwipeDirection) -> Vec<Cmd> {
        let mut cmds = deck.update(DeckMsg::Swipe(direction));
        let generation = scheduled_generation(&cmds);
        cmds.extend(deck.update(DeckMsg::SwipeSettled { generation }));
        cmds
    }

    #[rstest]
    fn test_like_appends_current_and_notifies(mut deck: DeckState) {
        let cmds = deck.update(DeckMsg::Swipe(SwipeDirection::Like));

        assert_eq!(deck.liked().len(), 1);
        assert_eq!(deck.liked()[0].name, "Anna");
        assert_eq!(notifications(&cmds), vec![NotificationKind::LikeSent]);
        assert!(cmds.contains(&Cmd::ScheduleSwipeSettle {
            generation: 1,
            delay_ms: 300
        }));
    }

    #[rstest]
    fn test_pass_never_touches_liked(mut deck: DeckState) {
        for _ in 0..5 {
            let cmds = swipe_and_settle(&mut deck, SwipeDirection::Pass);
            assert!(!notifications(&cmds).contains(&NotificationKind::LikeSent));
        }
        assert!(deck.liked().is_empty());
    }

    #[rstest]
    fn test_transition_is_held_until_settled(mut deck: DeckState) {
        let cmds = deck.update(DeckMsg::Swipe(SwipeDirection::Pass));
        let generation = scheduled_generation(&cmds);

        assert_eq!(deck.cursor(), 0);
        assert_eq!(
            deck.transition(),
            Some(SwipeTransition {
                direction: SwipeDirection::Pass,
                generation
            })
        );

        deck.update(DeckMsg::SwipeSettled { generation });
        assert_eq!(deck.transition(), None);
        assert_eq!(deck.cursor(), 1);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(7)]
    #[case(12)]
    fn test_cursor_is_action_count_mod_len(mut deck: DeckState, #[case] actions: usize) {
        for i in 0..actions {
            let direction = if i % 2 == 0 {
                SwipeDirection::Like
            } else {
                SwipeDirection::Pass
            };
            swipe_and_settle(&mut deck, direction);
        }
        assert_eq!(deck.cursor(), actions % deck.len());
    }

    #[rstest]
    fn test_wrap_notifies_once_per_wrap(mut deck: DeckState) {
        let mut exhausted = 0;
        for action in 1..=9 {
            let cmds = swipe_and_settle(&mut deck, SwipeDirection::Pass);
            let count = notifications(&cmds)
                .into_iter()
                .filter(|kind| *kind == NotificationKind::DeckExhausted)
                .count();
            assert_eq!(count, usize::from(action % 3 == 0), "action {action}");
            exhausted += count;
        }
        assert_eq!(exhausted, 3);
    }

    #[rstest]
    fn test_like_like_pass_like_scenario(mut deck: DeckState) {
        use SwipeDirection::*;

        swipe_and_settle(&mut deck, Like);
        swipe_and_settle(&mut deck, Like);
        let third = swipe_and_settle(&mut deck, Pass);
        assert_eq!(deck.cursor(), 0);
        assert_eq!(notifications(&third), vec![NotificationKind::DeckExhausted]);

        swipe_and_settle(&mut deck, Like);
        let names: Vec<&str> = deck.liked().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Anna", "Maksim", "Anna"]);
    }

    #[rstest]
    fn test_liking_twice_keeps_duplicates(mut deck: DeckState) {
        for _ in 0..4 {
            swipe_and_settle(&mut deck, SwipeDirection::Like);
        }
        let ids: Vec<u32> = deck.liked().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 1]);
    }

    #[rstest]
    fn test_rapid_swipes_supersede_pending_transition(mut deck: DeckState) {
        let first = deck.update(DeckMsg::Swipe(SwipeDirection::Pass));
        let second = deck.update(DeckMsg::Swipe(SwipeDirection::Like));
        let first_generation = scheduled_generation(&first);
        let second_generation = scheduled_generation(&second);
        assert!(second_generation > first_generation);

        // Both swipes acted on the profile that was current at the time
        assert_eq!(deck.liked()[0].name, "Anna");
        assert_eq!(
            deck.transition().map(|t| t.direction),
            Some(SwipeDirection::Like)
        );

        // The first timer fires late and is ignored
        assert!(deck
            .update(DeckMsg::SwipeSettled {
                generation: first_generation
            })
            .is_empty());
        assert_eq!(deck.cursor(), 0);
        assert!(deck.is_animating());

        deck.update(DeckMsg::SwipeSettled {
            generation: second_generation,
        });
        assert_eq!(deck.cursor(), 1);
        assert!(!deck.is_animating());
    }

    #[rstest]
    fn test_settle_without_transition_is_ignored(mut deck: DeckState) {
        assert!(deck
            .update(DeckMsg::SwipeSettled { generation: 0 })
            .is_empty());
        assert_eq!(deck.cursor(), 0);
    }

    #[test]
    fn test_swipe_on_empty_deck_is_noop() {
        let mut deck = DeckState::default();

        let cmds = deck.update(DeckMsg::Swipe(SwipeDirection::Like));

        assert!(cmds.is_empty());
        assert!(deck.liked().is_empty());
        assert!(deck.current().is_none());
        assert!(!deck.is_animating());
    }

    #[test]
    fn test_single_profile_deck_wraps_every_time() {
        let anna = SeedProfiles.profiles().remove(0);
        let mut deck = DeckState::new(vec![anna], DeckSettings::default());

        for _ in 0..3 {
            let cmds = swipe_and_settle(&mut deck, SwipeDirection::Like);
            assert_eq!(
                notifications(&cmds),
                vec![NotificationKind::LikeSent, NotificationKind::DeckExhausted]
            );
            assert_eq!(deck.cursor(), 0);
        }
    }

    #[rstest]
    fn test_profiles_replaced_resets_cursor_and_transition(mut deck: DeckState) {
        swipe_and_settle(&mut deck, SwipeDirection::Pass);
        let cmds = deck.update(DeckMsg::Swipe(SwipeDirection::Pass));
        let generation = scheduled_generation(&cmds);

        let elena = SeedProfiles.profiles().remove(2);
        deck.update(DeckMsg::ProfilesReplaced(vec![elena]));

        assert_eq!(deck.cursor(), 0);
        assert!(!deck.is_animating());
        assert!(deck
            .update(DeckMsg::SwipeSettled { generation })
            .is_empty());
        assert_eq!(deck.current().map(|p| p.name.as_str()), Some("Elena"));
    }

    #[test]
    fn test_settings_are_used_for_delays() {
        let settings = DeckSettings {
            swipe_delay_ms: 50,
            like_toast_ms: 10,
            deck_end_toast_ms: 20,
        };
        let mut deck = DeckState::new(SeedProfiles.profiles(), settings);

        let cmds = deck.update(DeckMsg::Swipe(SwipeDirection::Like));
        assert!(cmds.contains(&Cmd::ScheduleSwipeSettle {
            generation: 1,
            delay_ms: 50
        }));
        assert!(cmds.iter().any(|cmd| matches!(
            cmd,
            Cmd::Notify(Notification { duration_ms: 10, .. })
        )));
    }
}
