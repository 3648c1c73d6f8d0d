//! Host color scheme via `matchMedia("(prefers-color-scheme: dark)")`.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::MediaQueryListEvent;

use crate::error::ThemeError;
use crate::state::host::{ColorSchemeSource, SchemeListener};

use super::js_error;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

pub struct MediaQueryColorScheme {
    query: web_sys::MediaQueryList,
}

impl MediaQueryColorScheme {
    /// # Errors
    ///
    /// Returns [`ThemeError::ColorScheme`] if `matchMedia` is unavailable.
    pub fn open() -> Result<Self, ThemeError> {
        let window = web_sys::window()
            .ok_or_else(|| ThemeError::ColorScheme("no window".into()))?;
        let query = window
            .match_media(DARK_QUERY)
            .map_err(|e| ThemeError::ColorScheme(js_error(&e)))?
            .ok_or_else(|| ThemeError::ColorScheme("no media query".into()))?;
        Ok(Self { query })
    }
}

impl ColorSchemeSource for MediaQueryColorScheme {
    fn prefers_dark(&self) -> bool {
        self.query.matches()
    }

    fn subscribe(&self, listener: SchemeListener) -> Result<(), ThemeError> {
        let on_change = move |event: MediaQueryListEvent| listener(event.matches());
        let closure = Closure::<dyn Fn(MediaQueryListEvent)>::new(on_change);
        let callback = closure.as_ref().unchecked_ref();
        self.query
            .add_event_listener_with_callback("change", callback)
            .map_err(|e| ThemeError::ColorScheme(js_error(&e)))?;
        closure.forget();
        Ok(())
    }
}
