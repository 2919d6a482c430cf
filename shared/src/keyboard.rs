//! Global keyboard shortcuts.

/// Key press as seen by the `keydown` handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord<'a> {
    /// `KeyboardEvent.key`.
    pub key: &'a str,
    /// Control held.
    pub ctrl: bool,
    /// Command/Windows key held.
    pub meta: bool,
}

impl<'a> KeyChord<'a> {
    /// Plain key press without modifiers.
    pub fn plain(key: &'a str) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
        }
    }

    /// Key pressed with the platform command modifier.
    pub fn with_command(key: &'a str) -> Self {
        Self {
            key,
            ctrl: true,
            meta: false,
        }
    }

    fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// What a recognised shortcut does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd+K: focus and select the search box.
    FocusSearch,
    /// Escape: empty the search box if it has text.
    ClearSearch,
    /// Ctrl/Cmd+/: show the shortcut list.
    ShowHelp,
}

impl Shortcut {
    /// Whether the browser's own handling of the key must be suppressed.
    pub fn prevents_default(self) -> bool {
        !matches!(self, Shortcut::ClearSearch)
    }
}

/// Map a key press to a shortcut, if any.
pub fn match_shortcut(chord: KeyChord<'_>) -> Option<Shortcut> {
    if chord.key == "Escape" {
        return Some(Shortcut::ClearSearch);
    }
    if !chord.command() {
        return None;
    }
    match chord.key {
        key if key.eq_ignore_ascii_case("k") => Some(Shortcut::FocusSearch),
        "/" => Some(Shortcut::ShowHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_k_focuses_search_with_either_modifier() {
        assert_eq!(match_shortcut(KeyChord::with_command("k")), Some(Shortcut::FocusSearch));
        let meta = KeyChord {
            key: "K",
            ctrl: false,
            meta: true,
        };
        assert_eq!(match_shortcut(meta), Some(Shortcut::FocusSearch));
    }

    #[test]
    fn bare_keys_are_ignored_except_escape() {
        assert_eq!(match_shortcut(KeyChord::plain("k")), None);
        assert_eq!(match_shortcut(KeyChord::plain("/")), None);
        assert_eq!(match_shortcut(KeyChord::plain("Escape")), Some(Shortcut::ClearSearch));
    }

    #[test]
    fn command_slash_shows_help() {
        let shortcut = match_shortcut(KeyChord::with_command("/"));
        assert_eq!(shortcut, Some(Shortcut::ShowHelp));
        assert!(Shortcut::ShowHelp.prevents_default());
        assert!(!Shortcut::ClearSearch.prevents_default());
    }

    #[test]
    fn other_command_chords_pass_through() {
        assert_eq!(match_shortcut(KeyChord::with_command("c")), None);
    }
}
