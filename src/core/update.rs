use crate::core::{
    cmd::Cmd,
    msg::{deck::DeckMsg, filter::FilterMsg, ui::UiMsg, Msg},
    state::{toast::ToastState, ui::Dialog, AppState},
    textarea_engine::{NoopTextAreaEngine, TextAreaEngine},
};

/// Services the update path needs but does not own
pub struct UpdateContext<'a> {
    pub text_area: &'a dyn TextAreaEngine,
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    let ctx = UpdateContext {
        text_area: &NoopTextAreaEngine,
    };
    update_with_context(msg, state, &ctx)
}

/// Update with injected services (text editing engine)
pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    let commands = match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => state.system.update(system_msg),

        // Deck messages (delegated to DeckState)
        Msg::Deck(deck_msg) => state.deck.update(deck_msg),

        // Tabs and dialogs, coordinated with the deck and filters
        Msg::Ui(ui_msg) => update_ui(ui_msg, &mut state),

        // Filter dialog, coordinated with the dialog and the deck
        Msg::Filter(filter_msg) => update_filter(filter_msg, &mut state),

        // Profile editor (delegated to EditorState)
        Msg::Editor(editor_msg) => state.editor.update(editor_msg, ctx.text_area),

        // Toast lifecycle (delegated to ToastState)
        Msg::Toast(toast_msg) => state.toasts.update(toast_msg),
    };

    let commands = route_notifications(commands, &mut state.toasts);
    (state, commands)
}

fn update_ui(msg: UiMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        UiMsg::DialogOpened(Dialog::Detail) => {
            if state.current_profile().is_none() {
                log::debug!("detail dialog not opened: deck is empty");
                return vec![];
            }
            state.ui.update(msg)
        }

        UiMsg::DialogOpened(Dialog::Filters) => {
            let mut commands = state.filter.update(FilterMsg::Opened);
            commands.extend(state.ui.update(msg));
            commands
        }

        UiMsg::DialogClosed => {
            let mut commands = vec![];
            if state.ui.is_dialog_open(Dialog::Filters) {
                commands.extend(state.filter.update(FilterMsg::Cancelled));
            }
            commands.extend(state.ui.update(msg));
            commands
        }

        // The dialog closes first, then the swipe runs on the still-current profile
        UiMsg::DetailSwiped(direction) => {
            let mut commands = state.ui.update(msg);
            commands.extend(state.deck.update(DeckMsg::Swipe(direction)));
            commands
        }

        _ => state.ui.update(msg),
    }
}

fn update_filter(msg: FilterMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        FilterMsg::Opened => update_ui(UiMsg::DialogOpened(Dialog::Filters), state),

        FilterMsg::Applied => {
            let was_editing = state.filter.is_editing();
            let mut commands = state.filter.update(msg);
            if was_editing {
                commands.extend(state.ui.update(UiMsg::DialogClosed));
                if state.filters_narrow_deck() {
                    let profiles = state.filtered_catalog();
                    commands.extend(state.deck.update(DeckMsg::ProfilesReplaced(profiles)));
                }
            }
            commands
        }

        FilterMsg::Cancelled => {
            let mut commands = state.filter.update(msg);
            if state.ui.is_dialog_open(Dialog::Filters) {
                commands.extend(state.ui.update(UiMsg::DialogClosed));
            }
            commands
        }

        _ => state.filter.update(msg),
    }
}

/// Moves `Cmd::Notify` into the toast queue, replacing each with its expiry timer
pub fn route_notifications(commands: Vec<Cmd>, toasts: &mut ToastState) -> Vec<Cmd> {
    let mut routed = Vec::with_capacity(commands.len());
    for cmd in commands {
        match cmd {
            Cmd::Notify(notification) => routed.extend(toasts.push(notification)),
            Cmd::Batch(inner) => routed.push(Cmd::batch(route_notifications(inner, toasts))),
            other => routed.push(other),
        }
    }
    routed
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::{
            msg::{editor::EditorMsg, system::SystemMsg, toast::ToastMsg},
            state::ui::Tab,
        },
        domain::{Notification, StaticProfiles, SwipeDirection},
        infrastructure::config::Config,
    };

    fn run(state: AppState, msgs: impl IntoIterator<Item = Msg>) -> (AppState, Vec<Cmd>) {
        msgs.into_iter().fold((state, vec![]), |(state, mut all), msg| {
            let (state, cmds) = update(msg, state);
            all.extend(cmds);
            (state, all)
        })
    }

    /// Delivers every settle timer the commands scheduled
    fn settle(state: AppState, cmds: &[Cmd]) -> AppState {
        let msgs: Vec<Msg> = cmds
            .iter()
            .filter_map(|cmd| match cmd {
                Cmd::ScheduleSwipeSettle { generation, .. } => Some(Msg::Deck(
                    DeckMsg::SwipeSettled {
                        generation: *generation,
                    },
                )),
                _ => None,
            })
            .collect();
        run(state, msgs).0
    }

    fn swipe(state: AppState, direction: SwipeDirection) -> AppState {
        let (state, cmds) = update(Msg::Deck(DeckMsg::Swipe(direction)), state);
        settle(state, &cmds)
    }

    fn liked_names(state: &AppState) -> Vec<String> {
        state.deck.liked().iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_like_routes_toast_and_schedules_expiry() {
        let (state, cmds) = update(Msg::Deck(DeckMsg::Swipe(SwipeDirection::Like)), AppState::default());

        assert!(cmds.iter().all(|cmd| !matches!(cmd, Cmd::Notify(_))));
        assert!(cmds.contains(&Cmd::ScheduleToastExpiry {
            id: 1,
            after_ms: 2000
        }));
        let toast = state.toasts.latest().expect("toast shown");
        assert_eq!(toast.notification.title, "💖 Like sent!");
        assert_eq!(toast.notification.description, "You liked Anna");

        let (state, _) = update(Msg::Toast(ToastMsg::Expired { id: 1 }), state);
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn test_detail_dialog_like_closes_dialog_then_likes_current() {
        let (state, _) = update(
            Msg::Ui(UiMsg::DialogOpened(Dialog::Detail)),
            AppState::default(),
        );
        assert!(state.ui.is_dialog_open(Dialog::Detail));

        let (state, cmds) = update(
            Msg::Ui(UiMsg::DetailSwiped(SwipeDirection::Like)),
            state,
        );

        assert_eq!(state.ui.dialog, None);
        assert_eq!(liked_names(&state), vec!["Anna"]);
        assert!(state.deck.is_animating());

        let state = settle(state, &cmds);
        assert_eq!(state.current_profile().map(|p| p.name.as_str()), Some("Maksim"));
    }

    #[test]
    fn test_detail_dialog_requires_current_profile() {
        let (state, cmds) = update(
            Msg::Ui(UiMsg::DialogOpened(Dialog::Detail)),
            AppState::new(&StaticProfiles(vec![])),
        );

        assert_eq!(state.ui.dialog, None);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_three_likes_collect_every_profile_and_wrap() {
        let mut state = AppState::default();
        for _ in 0..3 {
            state = swipe(state, SwipeDirection::Like);
        }

        assert_eq!(liked_names(&state), vec!["Anna", "Maksim", "Elena"]);
        assert_eq!(state.deck.cursor(), 0);
        assert_eq!(
            state.toasts.latest().map(|t| t.notification.title.as_str()),
            Some("🎉 You have seen every profile")
        );
    }

    #[test]
    fn test_like_like_pass_like_revisits_first_profile() {
        let mut state = AppState::default();
        for direction in [
            SwipeDirection::Like,
            SwipeDirection::Like,
            SwipeDirection::Pass,
            SwipeDirection::Like,
        ] {
            state = swipe(state, direction);
        }

        assert_eq!(liked_names(&state), vec!["Anna", "Maksim", "Anna"]);
        assert_eq!(state.deck.cursor(), 1);
    }

    #[test]
    fn test_filter_cancel_restores_applied_settings() {
        let (state, _) = run(
            AppState::default(),
            [
                Msg::Filter(FilterMsg::Opened),
                Msg::Filter(FilterMsg::Adjusted(7)),
                Msg::Ui(UiMsg::DialogClosed),
            ],
        );

        assert_eq!(state.ui.dialog, None);
        assert!(!state.filter.is_editing());
        assert_eq!(state.filter.applied().age_range.min(), 18);
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn test_filter_apply_shows_toast_but_keeps_deck_by_default() {
        let (state, cmds) = run(
            AppState::default(),
            [
                Msg::Ui(UiMsg::DialogOpened(Dialog::Filters)),
                Msg::Filter(FilterMsg::FocusPrev),
                Msg::Filter(FilterMsg::Toggled),
                Msg::Filter(FilterMsg::Applied),
            ],
        );

        assert_eq!(state.ui.dialog, None);
        assert!(state.filter.applied().verified_only);
        assert_eq!(state.deck.len(), 3);
        assert_eq!(
            state.toasts.latest().map(|t| t.notification.description.as_str()),
            Some("Filters applied to search")
        );
        assert!(cmds.contains(&Cmd::ScheduleToastExpiry {
            id: 1,
            after_ms: 5000
        }));
    }

    #[test]
    fn test_filter_apply_narrows_deck_when_enabled() {
        let mut config = Config::default();
        config.deck.apply_filters = true;
        let state = AppState::new_with_config(&crate::domain::SeedProfiles, config);
        let state = swipe(state, SwipeDirection::Pass);
        assert_eq!(state.deck.cursor(), 1);

        let (state, _) = run(
            state,
            [
                Msg::Filter(FilterMsg::Opened),
                Msg::Filter(FilterMsg::FocusPrev),
                Msg::Filter(FilterMsg::Toggled),
                Msg::Filter(FilterMsg::Applied),
            ],
        );

        let names: Vec<&str> = state.deck.profiles().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Anna", "Maksim"]);
        assert_eq!(state.deck.cursor(), 0);
    }

    #[test]
    fn test_route_notifications_inside_batch() {
        let mut toasts = ToastState::default();
        let cmds = vec![Cmd::Batch(vec![
            Cmd::Notify(Notification::deck_exhausted(3000)),
            Cmd::LogInfo {
                message: "done".into(),
            },
        ])];

        let routed = route_notifications(cmds, &mut toasts);

        assert_eq!(
            routed,
            vec![Cmd::Batch(vec![
                Cmd::ScheduleToastExpiry {
                    id: 1,
                    after_ms: 3000
                },
                Cmd::LogInfo {
                    message: "done".into()
                },
            ])]
        );
        assert_eq!(toasts.len(), 1);
    }

    #[test]
    fn test_tabs_and_editor_are_independent_of_deck() {
        let (state, cmds) = run(
            AppState::default(),
            [
                Msg::Ui(UiMsg::TabSelected(Tab::Profile)),
                Msg::Editor(EditorMsg::InterestInputStarted),
                Msg::Editor(EditorMsg::InterestInputChar('Y')),
                Msg::Editor(EditorMsg::InterestInputCommitted),
                Msg::System(SystemMsg::Quit),
            ],
        );

        assert!(cmds.is_empty());
        assert_eq!(state.ui.tab, Tab::Profile);
        assert_eq!(state.editor.profile().interests, vec!["Travel", "Music", "Y"]);
        assert_eq!(state.deck.cursor(), 0);
        assert!(state.system.should_quit);
    }
}
