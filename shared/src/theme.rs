//! Light/dark theme flag and its persistence.

use std::{fmt, str::FromStr};

use crate::{config::THEME_STORAGE_KEY, prefs::KeyValueBackend};

/// Page colour scheme, applied as `<html data-theme="...">`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Default scheme.
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

impl Theme {
    /// Attribute and storage value.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Stored theme, falling back to the default when nothing usable is
    /// stored or storage cannot be read.
    pub fn load(backend: &impl KeyValueBackend) -> Theme {
        match backend.read(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|()| {
                tracing::warn!(stored = %raw, "unknown theme in storage, using default");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                tracing::warn!("failed to read theme preference: {err}");
                Theme::default()
            },
        }
    }

    /// Persist this theme. Failures are logged and otherwise ignored.
    pub fn store(self, backend: &impl KeyValueBackend) {
        if let Err(err) = backend.write(THEME_STORAGE_KEY, self.as_str()) {
            tracing::warn!(theme = self.as_str(), "failed to persist theme: {err}");
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryBackend;

    #[test]
    fn defaults_to_light() {
        assert_eq!(Theme::load(&MemoryBackend::new()), Theme::Light);
    }

    #[test]
    fn toggled_theme_round_trips_through_storage() {
        let backend = MemoryBackend::new();
        let next = Theme::load(&backend).toggled();
        next.store(&backend);
        assert_eq!(backend.raw(THEME_STORAGE_KEY).as_deref(), Some("dark"));
        assert_eq!(Theme::load(&backend), Theme::Dark);
    }

    #[test]
    fn garbage_falls_back_to_default() {
        let backend = MemoryBackend::new();
        backend.insert_raw(THEME_STORAGE_KEY, "sepia");
        assert_eq!(Theme::load(&backend), Theme::Light);
    }
}
