//! Theme preference and effective theme value types.
//!
//! DESIGN
//! ======
//! `ThemePreference` is what the user picked and what gets persisted.
//! `EffectiveTheme` is what the document actually renders after `auto` has
//! been resolved against the host color scheme. Keeping them as separate
//! types means the resolver is the only place an `auto` can disappear.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Glyph shown on the indicator while the dark theme is rendered.
pub const DARK_INDICATOR: &str = "\u{2600}\u{FE0F}";
/// Glyph shown on the indicator while the light theme is rendered.
pub const LIGHT_INDICATOR: &str = "\u{1F319}";

/// User-chosen theme setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Follow the host color scheme.
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemePreference {
    /// Storage and wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Next value in the toggle cycle: `light -> dark -> auto -> light`.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Auto,
            Self::Auto => Self::Light,
        }
    }

    /// Resolve against the host color scheme.
    pub fn resolve(self, system_prefers_dark: bool) -> EffectiveTheme {
        match self {
            Self::Auto => EffectiveTheme::from_dark(system_prefers_dark),
            Self::Light => EffectiveTheme::Light,
            Self::Dark => EffectiveTheme::Dark,
        }
    }

    /// Human-readable description used as the toggle's title.
    pub fn description(self) -> String {
        format!("Current theme: {self}")
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Self::Auto),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::InvalidPreference(other.to_owned())),
        }
    }
}

/// Theme actually rendered by the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectiveTheme {
    #[default]
    Light,
    Dark,
}

impl EffectiveTheme {
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Indicator glyph: a sun while dark (switch to light), a moon while light.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Dark => DARK_INDICATOR,
            Self::Light => LIGHT_INDICATOR,
        }
    }
}

impl fmt::Display for EffectiveTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectiveTheme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::InvalidTheme(other.to_owned())),
        }
    }
}
