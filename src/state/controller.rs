//! Theme preference state machine.
//!
//! The persisted preference is the only state; the controller itself holds
//! no mutable fields and every operation takes `&self`. One instance is
//! built at startup, wrapped in an `Rc`, and shared with the host callbacks.
//!
//! INVARIANTS
//! ==========
//! - The document theme attribute equals the last applied effective theme.
//! - Host scheme changes are applied only while the stored preference is
//!   `auto`.
//! - Remote sync is dispatched after the document is updated and never
//!   influences the outcome of an operation.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::state::host::{ColorSchemeSource, DocumentThemeSink, Storage, ThemeControls, ThemeSync};
use crate::state::theme::{EffectiveTheme, ThemePreference};

pub struct ThemePreferenceController {
    storage_key: String,
    storage: Box<dyn Storage>,
    scheme: Box<dyn ColorSchemeSource>,
    document: Box<dyn DocumentThemeSink>,
    sync: Box<dyn ThemeSync>,
}

impl ThemePreferenceController {
    pub fn new(
        config: &ThemeConfig,
        storage: impl Storage + 'static,
        scheme: impl ColorSchemeSource + 'static,
        document: impl DocumentThemeSink + 'static,
        sync: impl ThemeSync + 'static,
    ) -> Self {
        Self {
            storage_key: config.storage_key.clone(),
            storage: Box::new(storage),
            scheme: Box::new(scheme),
            document: Box::new(document),
            sync: Box::new(sync),
        }
    }

    /// Apply the stored preference, start following the host scheme, and
    /// bind `controls` to the preference operations.
    ///
    /// The stored value is read but not rewritten, so an empty slot stays
    /// empty until the user makes a choice. Intended to run once per page.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read, the document root cannot
    /// be updated, or the scheme subscription is refused.
    pub fn initialize(self: &Rc<Self>, controls: &dyn ThemeControls) -> Result<(), ThemeError> {
        let preference = self.get_preference()?;
        let theme = preference.resolve(self.scheme.prefers_dark());
        log::debug!("theme init: preference={preference} effective={theme}");

        self.apply_effective_theme(theme, preference)?;
        self.show_preference(preference);

        let weak = Rc::downgrade(self);
        self.scheme.subscribe(Box::new(move |prefers_dark| {
            if let Some(controller) = weak.upgrade() {
                if let Err(e) = controller.handle_color_scheme_change(prefers_dark) {
                    log::error!("theme scheme change failed: {e}");
                }
            }
        }))?;

        let weak = Rc::downgrade(self);
        controls.bind_toggle(Box::new(move || {
            if let Some(controller) = weak.upgrade() {
                if let Err(e) = controller.handle_toggle() {
                    log::error!("theme toggle failed: {e}");
                }
            }
        }));

        let weak = Rc::downgrade(self);
        controls.bind_options(Box::new(move |preference| {
            if let Some(controller) = weak.upgrade() {
                if let Err(e) = controller.handle_option(preference) {
                    log::error!("theme option failed: {e}");
                }
            }
        }));

        Ok(())
    }

    /// Persist `preference` and render the theme it resolves to.
    ///
    /// # Errors
    ///
    /// Returns an error if the write is rejected or the document root cannot
    /// be updated.
    pub fn set_preference(&self, preference: ThemePreference) -> Result<(), ThemeError> {
        let value = preference.as_str();
        self.storage.set_item(&self.storage_key, value)?;
        let theme = preference.resolve(self.scheme.prefers_dark());
        self.apply_effective_theme(theme, preference)?;
        self.show_preference(preference);
        Ok(())
    }

    /// React to a host scheme change. Ignored unless the stored preference is
    /// `auto`; an unrecognized stored value reads as `auto` and so follows
    /// the scheme too.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or the document root cannot
    /// be updated.
    pub fn handle_color_scheme_change(&self, prefers_dark: bool) -> Result<(), ThemeError> {
        let preference = self.get_preference()?;
        if preference != ThemePreference::Auto {
            log::debug!("theme scheme change ignored: preference={preference}");
            return Ok(());
        }
        let theme = EffectiveTheme::from_dark(prefers_dark);
        self.apply_effective_theme(theme, preference)
    }

    /// Advance the preference one step through `light -> dark -> auto`.
    ///
    /// # Errors
    ///
    /// Propagates storage and document failures from [`Self::set_preference`].
    pub fn handle_toggle(&self) -> Result<ThemePreference, ThemeError> {
        let next = self.get_preference()?.next();
        self.set_preference(next)?;
        Ok(next)
    }

    /// Select `preference` directly.
    ///
    /// # Errors
    ///
    /// Propagates storage and document failures from [`Self::set_preference`].
    pub fn handle_option(&self, preference: ThemePreference) -> Result<(), ThemeError> {
        self.set_preference(preference)
    }

    /// Stored preference, `auto` when unset or unrecognized.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Storage`] if storage cannot be read.
    pub fn get_preference(&self) -> Result<ThemePreference, ThemeError> {
        let Some(raw) = self.storage.get_item(&self.storage_key)? else {
            return Ok(ThemePreference::default());
        };
        Ok(raw.parse().unwrap_or_else(|e| {
            log::warn!("treating stored theme as auto: {e}");
            ThemePreference::default()
        }))
    }

    /// Theme currently shown by the document, `light` when unset.
    pub fn get_effective_theme(&self) -> EffectiveTheme {
        let raw = self.document.theme();
        raw.and_then(|raw| raw.parse().ok()).unwrap_or_default()
    }

    fn apply_effective_theme(
        &self,
        theme: EffectiveTheme,
        preference: ThemePreference,
    ) -> Result<(), ThemeError> {
        self.document.set_theme(theme)?;
        self.document.set_indicator(theme.indicator());
        self.sync.dispatch(preference);
        Ok(())
    }

    fn show_preference(&self, preference: ThemePreference) {
        let description = preference.description();
        self.document.set_toggle_state(preference, &description);
    }
}
