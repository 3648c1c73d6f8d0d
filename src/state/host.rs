//! Capability traits the theme controller uses to reach its host.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bindings in `web/` implement these over `localStorage`,
//! `matchMedia`, the document root, and `gloo-net`. Tests implement them
//! in memory so the state machine runs without a browser.

use crate::error::ThemeError;
use crate::state::theme::{EffectiveTheme, ThemePreference};

/// Callback receiving `true` when the host switches to a dark color scheme.
pub type SchemeListener = Box<dyn Fn(bool)>;
/// Callback for a click on the primary toggle.
pub type ToggleHandler = Box<dyn Fn()>;
/// Callback for an explicit option selection.
pub type OptionHandler = Box<dyn Fn(ThemePreference)>;

/// Durable key/value storage that survives reloads.
pub trait Storage {
    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] if the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] if the write is rejected.
    fn set_item(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// Live host color-scheme signal.
pub trait ColorSchemeSource {
    /// Whether the host currently prefers a dark color scheme.
    fn prefers_dark(&self) -> bool;

    /// Register `listener` for every subsequent scheme change.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::ColorScheme`] if the host refuses the subscription.
    fn subscribe(&self, listener: SchemeListener) -> Result<(), ThemeError>;
}

/// Document-level theme presentation.
pub trait DocumentThemeSink {
    /// Set the root theme attribute.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Document`] if the document root is unreachable.
    fn set_theme(&self, theme: EffectiveTheme) -> Result<(), ThemeError>;

    /// Raw value of the root theme attribute, if any.
    fn theme(&self) -> Option<String>;

    /// Update the indicator element's text. Absent indicators are skipped.
    fn set_indicator(&self, glyph: &str);

    /// Update the toggle's theme marker and description. Absent toggles are skipped.
    fn set_toggle_state(&self, preference: ThemePreference, description: &str);
}

/// User affordances that change the preference.
pub trait ThemeControls {
    fn bind_toggle(&self, on_toggle: ToggleHandler);
    fn bind_options(&self, on_select: OptionHandler);
}

/// Best-effort remote mirror of the preference.
///
/// Implementations must return immediately and never report failure to the
/// caller; the outcome is only logged.
pub trait ThemeSync {
    fn dispatch(&self, preference: ThemePreference);
}

impl<T: ThemeSync + ?Sized> ThemeSync for Box<T> {
    fn dispatch(&self, preference: ThemePreference) {
        (**self).dispatch(preference);
    }
}
