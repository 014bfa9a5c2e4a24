use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize, Serialize};
use strum::Display;

/// User-facing commands that keys can be bound to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Action {
    Quit,
    Suspend,
    NextTab,
    PrevTab,
    ShowDiscover,
    ShowMatches,
    ShowProfile,
    Pass,
    Like,
    ShowDetail,
    ShowFilters,
    ScrollUp,
    ScrollDown,
    EditBio,
    AddInterest,
    RemoveInterest,
}

/// Flat mapping from key sequences to actions
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Vec<KeyEvent>, Action>);

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;

        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                parse_key_sequence(&key_str)
                    .map(|keys| (keys, action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<_, _>>()?;

        Ok(KeyBindings(keybindings))
    }
}

impl KeyBindings {
    /// Action bound to a single key press
    pub fn action_for(&self, key: KeyEvent) -> Option<&Action> {
        self.get(&vec![normalize(key)])
    }
}

/// Keep only the fields bindings are compared on
fn normalize(key: KeyEvent) -> KeyEvent {
    let mut modifiers = key.modifiers;
    // Shift is already encoded in the character itself
    if let KeyCode::Char(c) = key.code {
        if c.is_ascii_uppercase() || !c.is_alphanumeric() {
            modifiers.remove(KeyModifiers::SHIFT);
        }
    }
    if key.code == KeyCode::BackTab {
        modifiers.remove(KeyModifiers::SHIFT);
    }
    KeyEvent::new(key.code, modifiers)
}

fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let raw_lower = raw.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&raw_lower);
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        match current {
            rest if rest.starts_with("ctrl-") => {
                modifiers.insert(KeyModifiers::CONTROL);
                current = &rest[5..];
            }
            rest if rest.starts_with("alt-") => {
                modifiers.insert(KeyModifiers::ALT);
                current = &rest[4..];
            }
            rest if rest.starts_with("shift-") => {
                modifiers.insert(KeyModifiers::SHIFT);
                current = &rest[6..];
            }
            _ => break,
        };
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let c = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        c if c.len() == 1 => {
            let mut c = c.chars().next().ok_or_else(|| format!("Unable to parse {raw}"))?;
            if modifiers.contains(KeyModifiers::SHIFT) {
                c = c.to_ascii_uppercase();
                modifiers.remove(KeyModifiers::SHIFT);
            }
            KeyCode::Char(c)
        }
        _ => return Err(format!("Unable to parse {raw}")),
    };
    Ok(KeyEvent::new(c, modifiers))
}

/// Parses `"<ctrl-c>"` or `"<g><g>"` style sequences
pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    if raw.chars().filter(|c| *c == '>').count() != raw.chars().filter(|c| *c == '<').count() {
        return Err(format!("Unable to parse `{raw}`"));
    }
    let raw = if !raw.contains("><") {
        let raw = raw.strip_prefix('<').unwrap_or(raw);
        raw.strip_suffix('>').unwrap_or(raw)
    } else {
        raw
    };
    raw.split("><")
        .map(|seq| {
            let seq = seq.strip_prefix('<').unwrap_or(seq);
            seq.strip_suffix('>').unwrap_or(seq)
        })
        .map(parse_key_event)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("<q>", KeyCode::Char('q'), KeyModifiers::NONE)]
    #[case("<ctrl-c>", KeyCode::Char('c'), KeyModifiers::CONTROL)]
    #[case("<shift-x>", KeyCode::Char('X'), KeyModifiers::NONE)]
    #[case("<space>", KeyCode::Char(' '), KeyModifiers::NONE)]
    #[case("<BackTab>", KeyCode::BackTab, KeyModifiers::NONE)]
    #[case("<Left>", KeyCode::Left, KeyModifiers::NONE)]
    fn test_parse_single_key(
        #[case] raw: &str,
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
    ) {
        assert_eq!(parse_key_sequence(raw), Ok(vec![KeyEvent::new(code, modifiers)]));
    }

    #[test]
    fn test_parse_multi_key_sequence() {
        assert_eq!(
            parse_key_sequence("<g><g>"),
            Ok(vec![
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
                KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            ])
        );
    }

    #[test]
    fn test_parse_invalid_key() {
        assert!(parse_key_sequence("<nope>").is_err());
        assert!(parse_key_sequence("<q").is_err());
    }

    #[test]
    fn test_deserialize_and_lookup() {
        let bindings: KeyBindings =
            json5::from_str(r#"{ "<l>": "Like", "<BackTab>": "PrevTab" }"#).expect("valid");

        assert_eq!(
            bindings.action_for(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE)),
            Some(&Action::Like)
        );
        // Terminals report BackTab with SHIFT held
        assert_eq!(
            bindings.action_for(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(&Action::PrevTab)
        );
        assert_eq!(
            bindings.action_for(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE)),
            None
        );
    }
}
