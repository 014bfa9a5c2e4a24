use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{
            deck::DeckMsg, editor::EditorMsg, filter::FilterMsg, system::SystemMsg, ui::UiMsg, Msg,
        },
        raw_msg::RawMsg,
        state::{
            editor::EditorMode,
            ui::{Dialog, Tab},
            AppState,
        },
    },
    domain::SwipeDirection,
    presentation::config::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        RawMsg::Key(key) => translate_key_event(key, state),

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input based on the open dialog, editor mode and active tab
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    match state.ui.dialog {
        Some(Dialog::Detail) => return translate_detail_keys(key, state),
        Some(Dialog::Filters) => return translate_filter_keys(key),
        None => {}
    }

    match state.editor.mode() {
        EditorMode::EditingBio => translate_bio_keys(key),
        EditorMode::AddingInterest(_) => translate_interest_input_keys(key),
        EditorMode::Browsing => translate_normal_mode_keys(key, state),
    }
}

fn translate_detail_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if key.code == KeyCode::Esc {
        return vec![Msg::Ui(UiMsg::DialogClosed)];
    }
    match state.config.config.keybindings.action_for(key) {
        Some(Action::Pass) => vec![Msg::Ui(UiMsg::DetailSwiped(SwipeDirection::Pass))],
        Some(Action::Like) => vec![Msg::Ui(UiMsg::DetailSwiped(SwipeDirection::Like))],
        Some(Action::ShowDetail) => vec![Msg::Ui(UiMsg::DialogClosed)],
        Some(Action::Quit) => vec![Msg::System(SystemMsg::Quit)],
        _ => vec![],
    }
}

/// The filter dialog owns the arrow keys while it is open
fn translate_filter_keys(key: KeyEvent) -> Vec<Msg> {
    let msg = match key.code {
        KeyCode::Esc => FilterMsg::Cancelled,
        KeyCode::Enter => FilterMsg::Applied,
        KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => FilterMsg::FocusPrev,
        KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => FilterMsg::FocusNext,
        KeyCode::Left | KeyCode::Char('h') => FilterMsg::Adjusted(-step(key)),
        KeyCode::Right | KeyCode::Char('l') => FilterMsg::Adjusted(step(key)),
        KeyCode::Char(' ') => FilterMsg::Toggled,
        _ => return vec![],
    };
    vec![Msg::Filter(msg)]
}

/// Shift moves sliders in steps of five
fn step(key: KeyEvent) -> i32 {
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        5
    } else {
        1
    }
}

fn translate_bio_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Esc => vec![Msg::Editor(EditorMsg::BioEditFinished)],
        // Everything else goes to the textarea
        _ => vec![Msg::Editor(EditorMsg::BioInput(key))],
    }
}

fn translate_interest_input_keys(key: KeyEvent) -> Vec<Msg> {
    let msg = match key.code {
        KeyCode::Esc => EditorMsg::InterestInputCancelled,
        KeyCode::Enter => EditorMsg::InterestInputCommitted,
        KeyCode::Backspace => EditorMsg::InterestInputBackspace,
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            EditorMsg::InterestInputChar(c)
        }
        _ => return vec![],
    };
    vec![Msg::Editor(msg)]
}

/// Key bindings when no dialog or text input has focus
fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if let Some(action) = state.config.config.keybindings.action_for(key) {
        return translate_action_to_msg(action, state);
    }

    vec![]
}

fn translate_action_to_msg(action: &Action, state: &AppState) -> Vec<Msg> {
    let tab = state.ui.tab;
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],

        Action::NextTab => vec![Msg::Ui(UiMsg::NextTabSelected)],
        Action::PrevTab => vec![Msg::Ui(UiMsg::PrevTabSelected)],
        Action::ShowDiscover => vec![Msg::Ui(UiMsg::TabSelected(Tab::Discover))],
        Action::ShowMatches => vec![Msg::Ui(UiMsg::TabSelected(Tab::Matches))],
        Action::ShowProfile => vec![Msg::Ui(UiMsg::TabSelected(Tab::Profile))],
        Action::ShowFilters => vec![Msg::Ui(UiMsg::DialogOpened(Dialog::Filters))],

        Action::Pass if tab == Tab::Discover => {
            vec![Msg::Deck(DeckMsg::Swipe(SwipeDirection::Pass))]
        }
        Action::Like if tab == Tab::Discover => {
            vec![Msg::Deck(DeckMsg::Swipe(SwipeDirection::Like))]
        }
        Action::ShowDetail if tab == Tab::Discover => {
            vec![Msg::Ui(UiMsg::DialogOpened(Dialog::Detail))]
        }

        Action::ScrollUp => match tab {
            Tab::Matches => vec![Msg::Ui(UiMsg::PrevMatchSelected)],
            Tab::Profile => vec![Msg::Editor(EditorMsg::PrevInterestSelected)],
            Tab::Discover => vec![],
        },
        Action::ScrollDown => match tab {
            Tab::Matches => match state.deck.liked().len() {
                0 => vec![],
                len => vec![Msg::Ui(UiMsg::NextMatchSelected {
                    max_index: len - 1,
                })],
            },
            Tab::Profile => vec![Msg::Editor(EditorMsg::NextInterestSelected)],
            Tab::Discover => vec![],
        },

        Action::EditBio if tab == Tab::Profile => vec![Msg::Editor(EditorMsg::BioEditStarted)],
        Action::AddInterest if tab == Tab::Profile => {
            vec![Msg::Editor(EditorMsg::InterestInputStarted)]
        }
        Action::RemoveInterest if tab == Tab::Profile => {
            vec![Msg::Editor(EditorMsg::InterestRemoved)]
        }

        _ => vec![],
    }
}
