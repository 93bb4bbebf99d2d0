//! Theme and sound preferences, persisted through a narrow storage seam.

use std::{cell::RefCell, collections::HashMap, str::FromStr};
use thiserror::Error;

pub const THEME_KEY: &str = "theme";
pub const SOUND_KEY: &str = "soundEnabled";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl FromStr for Theme {
    type Err = PreferenceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(PreferenceError::UnknownTheme(other.to_string())),
        }
    }
}

/// Key/value persistence. Writes that fail are dropped by the implementation.
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

#[derive(Default, Debug)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Preferences {
    pub theme: Theme,
    pub sound_enabled: bool,
}

impl Preferences {
    /// Stored values win; an unknown or missing theme falls back to the
    /// system preference, and sound stays on unless explicitly `"false"`.
    pub fn load(storage: &impl PreferenceStorage, system_prefers_dark: bool) -> Self {
        let system_theme = if system_prefers_dark { Theme::Dark } else { Theme::Light };
        let theme = storage
            .read(THEME_KEY)
            .and_then(|value| value.parse::<Theme>().ok())
            .unwrap_or(system_theme);
        let sound_enabled = storage.read(SOUND_KEY).as_deref() != Some("false");

        Self { theme, sound_enabled }
    }

    pub fn persist(&self, storage: &impl PreferenceStorage) {
        storage.write(THEME_KEY, self.theme.as_str());
        storage.write(SOUND_KEY, if self.sound_enabled { "true" } else { "false" });
    }

    pub fn with_theme_toggled(self) -> Self {
        Self {
            theme: self.theme.toggled(),
            ..self
        }
    }

    pub fn with_sound_toggled(self) -> Self {
        Self {
            sound_enabled: !self.sound_enabled,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_system_and_enable_sound() {
        let storage = MemoryStorage::default();
        let prefs = Preferences::load(&storage, true);
        assert_eq!(prefs.theme, Theme::Dark);
        assert!(prefs.sound_enabled);
    }

    #[test]
    fn stored_values_round_trip() {
        let storage = MemoryStorage::default();
        let prefs = Preferences::load(&storage, false).with_theme_toggled().with_sound_toggled();
        prefs.persist(&storage);

        assert_eq!(storage.read(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(storage.read(SOUND_KEY).as_deref(), Some("false"));
        assert_eq!(Preferences::load(&storage, false), prefs);
    }

    #[test]
    fn garbage_theme_falls_back() {
        let storage = MemoryStorage::default();
        storage.write(THEME_KEY, "sepia");
        storage.write(SOUND_KEY, "maybe");
        let prefs = Preferences::load(&storage, false);
        assert_eq!(prefs.theme, Theme::Light);
        assert!(prefs.sound_enabled);
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(PreferenceError::UnknownTheme("sepia".to_string()))
        );
    }

    #[test]
    fn toggle_label_names_the_other_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
    }
}
