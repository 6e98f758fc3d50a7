//! Light/dark theme switch.
//!
//! The chosen mode is written to the preference store under [`THEME_KEY`] on
//! every toggle and read back once when the page starts. An absent or unknown
//! value means light mode.

use crate::domain::ports::PreferenceStore;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const THEME_KEY: &str = "theme";
pub const DARK_MODE_CLASS: &str = "dark-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn from_preference(value: Option<&str>) -> Self {
        match value {
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct ThemeToggle {
    store: Box<dyn PreferenceStore>,
    mode: ThemeMode,
}

impl ThemeToggle {
    /// Restores the saved mode from `store`.
    pub fn load(store: Box<dyn PreferenceStore>) -> Result<Self> {
        let saved = store.get(THEME_KEY)?;
        let mode = ThemeMode::from_preference(saved.as_deref());
        tracing::debug!("Restored theme preference: {}", mode);
        Ok(Self { store, mode })
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    /// Text of the toggle button, which names the mode it switches to.
    pub fn button_label(&self) -> &'static str {
        match self.mode {
            ThemeMode::Dark => "☀️ Light Mode",
            ThemeMode::Light => "🌙 Dark Mode",
        }
    }

    pub fn body_class(&self) -> Option<&'static str> {
        self.is_dark().then_some(DARK_MODE_CLASS)
    }

    pub fn toggle(&mut self) -> Result<ThemeMode> {
        let next = self.mode.toggled();
        self.store.set(THEME_KEY, next.as_str())?;
        self.mode = next;
        tracing::info!("Theme toggled to: {}", next);
        Ok(next)
    }
}

impl fmt::Debug for ThemeToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeToggle").field("mode", &self.mode).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryPreferenceStore;
    use std::sync::{Arc, Mutex};

    /// Keeps every write so the test can inspect what was persisted.
    #[derive(Default, Clone)]
    struct RecordingStore {
        writes: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl PreferenceStore for RecordingStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            let writes = self.writes.lock().unwrap();
            Ok(writes
                .iter()
                .rev()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone()))
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.writes
                .lock()
                .unwrap()
                .push((key.to_string(), value.to_string()));
            Ok(())
        }
    }

    #[test]
    fn test_defaults_to_light() {
        let theme = ThemeToggle::load(Box::new(MemoryPreferenceStore::new())).unwrap();
        assert_eq!(theme.mode(), ThemeMode::Light);
        assert_eq!(theme.button_label(), "🌙 Dark Mode");
        assert_eq!(theme.body_class(), None);
    }

    #[test]
    fn test_restores_saved_dark_mode() {
        let mut store = MemoryPreferenceStore::new();
        store.set(THEME_KEY, "dark").unwrap();
        let theme = ThemeToggle::load(Box::new(store)).unwrap();
        assert!(theme.is_dark());
        assert_eq!(theme.button_label(), "☀️ Light Mode");
        assert_eq!(theme.body_class(), Some(DARK_MODE_CLASS));
    }

    #[test]
    fn test_unknown_preference_is_light() {
        assert_eq!(ThemeMode::from_preference(Some("sepia")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_preference(None), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_flips_mode_and_persists_each_change() {
        let store = RecordingStore::default();
        let writes = store.writes.clone();
        let mut theme = ThemeToggle::load(Box::new(store)).unwrap();
        assert!(writes.lock().unwrap().is_empty());

        assert_eq!(theme.toggle().unwrap(), ThemeMode::Dark);
        assert_eq!(theme.toggle().unwrap(), ThemeMode::Light);
        assert!(!theme.is_dark());

        assert_eq!(
            *writes.lock().unwrap(),
            vec![
                (THEME_KEY.to_string(), "dark".to_string()),
                (THEME_KEY.to_string(), "light".to_string()),
            ]
        );
    }
}
