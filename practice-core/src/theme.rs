//! Light/dark theme preference
use crate::store::PreferenceStore;

/// Document attribute consumed by the stylesheet.
pub const THEME_ATTRIBUTE: &str = "data-theme";
/// Media query reporting the operating system's dark preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
pub const DEFAULT_THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn from_os(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves and persists the theme against a preference store.
///
/// Only explicit choices are written; until one exists the operating system
/// preference stays authoritative.
pub struct ThemePreference<S> {
    store: S,
    key: String,
}

impl<S: PreferenceStore> ThemePreference<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The persisted choice, if any. Unreadable or unknown values count as none.
    #[must_use]
    pub fn stored(&self) -> Option<Theme> {
        match self.store.get(&self.key) {
            Ok(value) => value.as_deref().and_then(Theme::parse),
            Err(err) => {
                log::warn!("theme preference unreadable: {err}");
                None
            }
        }
    }

    #[must_use]
    pub fn resolve(&self, os_prefers_dark: bool) -> Theme {
        self.stored()
            .unwrap_or_else(|| Theme::from_os(os_prefers_dark))
    }

    /// Persist an explicit choice.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn choose(&self, theme: Theme) -> Result<Theme, S::Error> {
        self.store.set(&self.key, theme.as_str())?;
        Ok(theme)
    }

    /// Flip `current` and persist the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    pub fn toggle(&self, current: Theme) -> Result<Theme, S::Error> {
        self.choose(current.toggled())
    }

    /// Whether anything is stored under the key, recognised or not.
    #[must_use]
    pub fn has_choice(&self) -> bool {
        match self.store.get(&self.key) {
            Ok(value) => value.is_some(),
            Err(err) => {
                log::warn!("theme preference unreadable: {err}");
                false
            }
        }
    }

    /// Theme to apply after an OS scheme change, or `None` once any value is stored.
    #[must_use]
    pub fn follow_os(&self, prefers_dark: bool) -> Option<Theme> {
        (!self.has_choice()).then_some(Theme::from_os(prefers_dark))
    }
}
