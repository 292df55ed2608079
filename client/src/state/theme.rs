//! Theme preference model and the resolution rule.
//!
//! DESIGN
//! ======
//! A `ThemePreference` is what the visitor chose; a `ResolvedTheme` is what
//! the document actually shows. `resolve` is the single rule mapping one to
//! the other. The resolver, the pre-paint script, and its Rust mirror all
//! go through it.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

pub use canvas::palette::ResolvedTheme;

/// Cookie name holding the persisted preference.
pub const STORAGE_KEY: &str = "theme";

/// One year, in seconds.
pub const STORAGE_MAX_AGE_SECS: u32 = 365 * 24 * 60 * 60;

/// Media query reporting the OS dark-mode signal.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// The visitor's choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
    System,
}

impl ThemePreference {
    pub const ALL: [Self; 3] = [Self::Dark, Self::Light, Self::System];

    /// Storage form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::System => "system",
        }
    }

    /// Parse a persisted value, falling back to the default when it is
    /// absent or unrecognized.
    #[must_use]
    pub fn parse_stored(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme preference: {0:?}")]
pub struct PreferenceParseError(pub String);

impl FromStr for ThemePreference {
    type Err = PreferenceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            "system" => Ok(Self::System),
            other => Err(PreferenceParseError(other.to_owned())),
        }
    }
}

/// Map a preference to the theme the document shows.
///
/// `os_prefers_dark` is `None` when the OS signal is unavailable; `System`
/// then falls back to the default.
#[must_use]
pub fn resolve(preference: ThemePreference, os_prefers_dark: Option<bool>) -> ResolvedTheme {
    match preference {
        ThemePreference::Dark => ResolvedTheme::Dark,
        ThemePreference::Light => ResolvedTheme::Light,
        ThemePreference::System => os_prefers_dark.map_or(ResolvedTheme::default(), ResolvedTheme::from_prefers_dark),
    }
}

/// Preference plus what it currently resolves to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub preference: ThemePreference,
    pub resolved: ResolvedTheme,
}

impl ThemeState {
    #[must_use]
    pub fn new(preference: ThemePreference, os_prefers_dark: Option<bool>) -> Self {
        Self { preference, resolved: resolve(preference, os_prefers_dark) }
    }

    /// The explicit preference the toggle button switches to.
    #[must_use]
    pub fn toggle_target(&self) -> ThemePreference {
        match self.resolved {
            ResolvedTheme::Dark => ThemePreference::Light,
            ResolvedTheme::Light => ThemePreference::Dark,
        }
    }
}
