//! Theme presentation and controls over the live document.
//!
//! Missing indicator, toggle, or option elements are not errors: pages that
//! do not render them simply get no affordance.

use std::rc::Rc;

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::state::host::{DocumentThemeSink, OptionHandler, ThemeControls, ToggleHandler};
use crate::state::theme::{EffectiveTheme, ThemePreference};

use super::{elements, js_error, listen};

#[derive(Clone)]
pub struct HtmlDocument {
    document: web_sys::Document,
    theme_attribute: String,
    indicator_id: String,
    toggle_id: String,
    option_attribute: String,
    option_selector: String,
}

impl HtmlDocument {
    pub fn new(document: web_sys::Document, config: &ThemeConfig) -> Self {
        Self {
            document,
            theme_attribute: config.theme_attribute.clone(),
            indicator_id: config.indicator_id.clone(),
            toggle_id: config.toggle_id.clone(),
            option_attribute: config.option_attribute.clone(),
            option_selector: config.option_selector(),
        }
    }
}

impl DocumentThemeSink for HtmlDocument {
    fn set_theme(&self, theme: EffectiveTheme) -> Result<(), ThemeError> {
        let Some(root) = self.document.document_element() else {
            return Err(ThemeError::Document("no root element".into()));
        };
        root.set_attribute(&self.theme_attribute, theme.as_str())
            .map_err(|e| ThemeError::Document(js_error(&e)))
    }

    fn theme(&self) -> Option<String> {
        let root = self.document.document_element()?;
        root.get_attribute(&self.theme_attribute)
    }

    fn set_indicator(&self, glyph: &str) {
        if let Some(icon) = self.document.get_element_by_id(&self.indicator_id) {
            icon.set_text_content(Some(glyph));
        }
    }

    fn set_toggle_state(&self, preference: ThemePreference, description: &str) {
        let Some(toggle) = self.document.get_element_by_id(&self.toggle_id) else {
            return;
        };
        let marker = preference.as_str();
        let _ = toggle.set_attribute(&self.theme_attribute, marker);
        let _ = toggle.set_attribute("title", description);
    }
}

impl ThemeControls for HtmlDocument {
    fn bind_toggle(&self, on_toggle: ToggleHandler) {
        if let Some(toggle) = self.document.get_element_by_id(&self.toggle_id) {
            listen(&toggle, "click", move |_| on_toggle());
        }
    }

    fn bind_options(&self, on_select: OptionHandler) {
        let options = match self.document.query_selector_all(&self.option_selector) {
            Ok(list) => elements(&list),
            Err(e) => {
                log::warn!("theme options unavailable: {}", js_error(&e));
                return;
            }
        };

        let on_select: Rc<dyn Fn(ThemePreference)> = Rc::from(on_select);
        for option in options {
            let raw = option
                .get_attribute(&self.option_attribute)
                .unwrap_or_default();
            let preference = match raw.parse::<ThemePreference>() {
                Ok(preference) => preference,
                Err(e) => {
                    log::warn!("skipping theme option: {e}");
                    continue;
                }
            };
            let on_select = Rc::clone(&on_select);
            listen(&option, "click", move |event| {
                event.prevent_default();
                on_select(preference);
            });
        }
    }
}
