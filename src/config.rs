//! Theme controller configuration.
//!
//! Defaults describe the markup the server renders. A page can override any
//! field by placing a JSON object in the `data-theme-config` attribute of the
//! `<html>` element; missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ThemeError;

pub const DEFAULT_STORAGE_KEY: &str = "acadify-theme";
pub const DEFAULT_SYNC_ENDPOINT: &str = "/api/toggle-theme";
pub const DEFAULT_THEME_ATTRIBUTE: &str = "data-theme";
pub const DEFAULT_INDICATOR_ID: &str = "theme-icon";
pub const DEFAULT_TOGGLE_ID: &str = "theme-toggle";
pub const DEFAULT_OPTION_ATTRIBUTE: &str = "data-theme-option";

/// Attribute on `<html>` that may carry a JSON config override.
pub const CONFIG_ATTRIBUTE: &str = "data-theme-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Durable storage slot holding the preference.
    pub storage_key: String,
    /// Path receiving the best-effort preference sync.
    pub sync_endpoint: String,
    /// Disable the remote sync entirely (e.g. for anonymous pages).
    pub sync_enabled: bool,
    /// Attribute set on the document root with the effective theme.
    pub theme_attribute: String,
    pub indicator_id: String,
    pub toggle_id: String,
    /// Attribute identifying selectable options; its value names the preference.
    pub option_attribute: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            sync_endpoint: DEFAULT_SYNC_ENDPOINT.to_owned(),
            sync_enabled: true,
            theme_attribute: DEFAULT_THEME_ATTRIBUTE.to_owned(),
            indicator_id: DEFAULT_INDICATOR_ID.to_owned(),
            toggle_id: DEFAULT_TOGGLE_ID.to_owned(),
            option_attribute: DEFAULT_OPTION_ATTRIBUTE.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse a JSON override. Absent fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] if `raw` is not a JSON object matching
    /// the config shape, or if a required string field is blank.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|e| ThemeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve an optional override, falling back to defaults when it is
    /// absent or unusable.
    pub fn from_override(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => Self::default(),
            Some(raw) => Self::from_json(raw).unwrap_or_else(|e| {
                log::warn!("ignoring theme config override: {e}");
                Self::default()
            }),
        }
    }

    /// Selector matching every option element.
    pub fn option_selector(&self) -> String {
        format!("[{}]", self.option_attribute)
    }

    fn validate(&self) -> Result<(), ThemeError> {
        let fields = [
            ("storage_key", &self.storage_key),
            ("theme_attribute", &self.theme_attribute),
            ("indicator_id", &self.indicator_id),
            ("toggle_id", &self.toggle_id),
            ("option_attribute", &self.option_attribute),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ThemeError::Config(format!("{name} must not be empty")));
            }
        }
        if self.sync_enabled && self.sync_endpoint.trim().is_empty() {
            return Err(ThemeError::Config(
                "sync_endpoint must not be empty while sync is enabled".into(),
            ));
        }
        Ok(())
    }
}
