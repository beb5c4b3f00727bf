use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::{KeyValueStore, THEME_KEY};

const THEME_CLASS_PREFIX: &str = "theme-";
const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
    Midnight,
    Paper,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}`")]
pub struct ParseThemeError(pub String);

impl ThemeName {
    pub const ALL: [ThemeName; 4] = [
        ThemeName::Dark,
        ThemeName::Light,
        ThemeName::Midnight,
        ThemeName::Paper,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Midnight => "midnight",
            Self::Paper => "paper",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
            Self::Midnight => "Midnight",
            Self::Paper => "Paper",
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark | Self::Midnight)
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Dark => "theme-dark",
            Self::Light => "theme-light",
            Self::Midnight => "theme-midnight",
            Self::Paper => "theme-paper",
        }
    }

    /// The palette on the other side of the light/dark switch.
    pub fn counterpart(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
            Self::Midnight => Self::Paper,
            Self::Paper => Self::Midnight,
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseThemeError(s.to_string()))
    }
}

/// Computes the document root's class list for `theme`.
///
/// Classes unrelated to theming survive in their original order; every
/// `theme-*` class and the `dark` marker are replaced.
pub fn root_classes(existing: &str, theme: ThemeName) -> String {
    let mut classes: Vec<&str> = existing
        .split_whitespace()
        .filter(|class| !class.starts_with(THEME_CLASS_PREFIX) && *class != DARK_CLASS)
        .collect();
    classes.push(theme.css_class());
    if theme.is_dark() {
        classes.push(DARK_CLASS);
    }
    classes.join(" ")
}

/// Reads and writes the active palette through a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct ThemeStore<S> {
    store: S,
    fallback: ThemeName,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn new(store: S, fallback: ThemeName) -> Self {
        Self { store, fallback }
    }

    pub fn current(&self) -> ThemeName {
        match self.store.get(THEME_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|err: ParseThemeError| {
                log::debug!("{err}, using {}", self.fallback);
                self.fallback
            }),
            None => self.fallback,
        }
    }

    pub fn set(&self, theme: ThemeName) -> ThemeName {
        if let Err(err) = self.store.set(THEME_KEY, theme.as_str()) {
            log::warn!("Failed to persist theme {theme}: {err}");
        }
        theme
    }

    pub fn toggle_dark(&self) -> ThemeName {
        self.set(self.current().counterpart())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn theme_classes(classes: &str) -> Vec<&str> {
        classes
            .split_whitespace()
            .filter(|c| c.starts_with(THEME_CLASS_PREFIX))
            .collect()
    }

    #[test]
    fn test_root_classes_keeps_one_theme_class() {
        let mut classes = "antialiased theme-light scroll-smooth".to_string();
        for theme in ThemeName::ALL {
            classes = root_classes(&classes, theme);
            assert_eq!(theme_classes(&classes), vec![theme.css_class()]);
            assert_eq!(classes.split_whitespace().any(|c| c == DARK_CLASS), theme.is_dark());
            assert!(classes.starts_with("antialiased scroll-smooth"));
        }
    }

    #[test]
    fn test_theme_survives_reload() {
        let storage = MemoryStore::new();
        for theme in ThemeName::ALL {
            ThemeStore::new(storage.clone(), ThemeName::Dark).set(theme);
            let reloaded = ThemeStore::new(storage.clone(), ThemeName::Dark);
            assert_eq!(reloaded.current(), theme);
        }
    }

    #[test]
    fn test_unparseable_theme_falls_back() {
        let storage = MemoryStore::new();
        storage.set(THEME_KEY, "{\"not\":\"a theme\"}").unwrap();
        let themes = ThemeStore::new(storage, ThemeName::Paper);
        assert_eq!(themes.current(), ThemeName::Paper);
    }

    #[test]
    fn test_toggle_dark_flips_within_family() {
        let themes = ThemeStore::new(MemoryStore::new(), ThemeName::Dark);
        assert_eq!(themes.toggle_dark(), ThemeName::Light);
        assert_eq!(themes.toggle_dark(), ThemeName::Dark);

        themes.set(ThemeName::Midnight);
        assert_eq!(themes.toggle_dark(), ThemeName::Paper);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(" Midnight ".parse::<ThemeName>(), Ok(ThemeName::Midnight));
        assert!("sepia".parse::<ThemeName>().is_err());
    }

    #[test]
    fn test_theme_toggle_leaves_session_and_page_alone() {
        use crate::auth::{AuthProvider, DemoAuthProvider};
        use crate::page::PageId;
        use crate::storage::AUTH_KEY;

        let storage = MemoryStore::new();
        let auth = DemoAuthProvider::new(storage.clone(), chrono::Duration::hours(1));
        let user = futures::executor::block_on(auth.sign_in("ada@folio.app", "pw")).unwrap();
        let record = storage.get(AUTH_KEY);
        let page = PageId::resolve("/pricing");

        let themes = ThemeStore::new(storage.clone(), ThemeName::Dark);
        themes.toggle_dark();
        themes.toggle_dark();
        themes.set(ThemeName::Paper);

        assert_eq!(storage.get(AUTH_KEY), record);
        assert_eq!(auth.current_user(), Some(user));
        assert_eq!(PageId::resolve("/pricing"), page);
    }
}
