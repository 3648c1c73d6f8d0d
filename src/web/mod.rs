//! Browser entry point and DOM bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Compiled only with the `hydrate` feature. On load this module installs
//! logging, waits for the DOM, builds the single theme controller over the
//! browser capabilities, and wires the page widgets.

pub mod document;
pub mod media;
pub mod storage;
pub mod widgets;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::config::{CONFIG_ATTRIBUTE, ThemeConfig};
use crate::error::ThemeError;
use crate::net::sync::{HttpThemeSync, NoopSync};
use crate::state::controller::ThemePreferenceController;
use crate::state::host::ThemeSync;
use crate::state::theme::ThemePreference;

use self::document::HtmlDocument;
use self::media::MediaQueryColorScheme;
use self::storage::LocalStorage;

type SharedController = Rc<ThemePreferenceController>;

thread_local! {
    static CONTROLLER: RefCell<Option<SharedController>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    on_ready(|| {
        if let Err(e) = boot() {
            log::error!("theme startup failed: {e}");
        }
        widgets::setup_all();
    });
}

/// Stored preference as a string, for other page scripts.
#[wasm_bindgen(js_name = themePreference)]
pub fn theme_preference() -> Option<String> {
    with_controller(|c| c.get_preference().ok())
        .flatten()
        .map(|p| p.as_str().to_owned())
}

/// Theme currently rendered by the document.
#[wasm_bindgen(js_name = effectiveTheme)]
pub fn effective_theme() -> Option<String> {
    with_controller(|c| c.get_effective_theme().as_str().to_owned())
}

/// Select a preference from script.
///
/// # Errors
///
/// Rejects unknown preference strings, calls made before startup, and
/// storage or document failures.
#[wasm_bindgen(js_name = setThemePreference)]
pub fn set_theme_preference(preference: &str) -> Result<(), JsValue> {
    let preference: ThemePreference = preference.parse().map_err(to_js)?;
    with_controller(|c| c.set_preference(preference))
        .ok_or_else(|| JsValue::from_str("theme controller not started"))?
        .map_err(to_js)
}

fn boot() -> Result<(), ThemeError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ThemeError::Document("no document".into()))?;
    let config = ThemeConfig::from_override(
        document
            .document_element()
            .and_then(|root| root.get_attribute(CONFIG_ATTRIBUTE))
            .as_deref(),
    );

    let page = HtmlDocument::new(document, &config);
    let sync: Box<dyn ThemeSync> = if config.sync_enabled {
        Box::new(HttpThemeSync::new(&config.sync_endpoint))
    } else {
        Box::new(NoopSync)
    };
    let controller = Rc::new(ThemePreferenceController::new(
        &config,
        LocalStorage::open()?,
        MediaQueryColorScheme::open()?,
        page.clone(),
        sync,
    ));
    controller.initialize(&page)?;

    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));
    Ok(())
}

fn with_controller<T>(f: impl FnOnce(&ThemePreferenceController) -> T) -> Option<T> {
    let controller = CONTROLLER.with(|slot| slot.borrow().clone())?;
    Some(f(&controller))
}

/// Run `f` once the DOM has been parsed.
fn on_ready(f: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let mut f = Some(f);
    listen(&document, "DOMContentLoaded", move |_| {
        if let Some(f) = f.take() {
            f();
        }
    });
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub(crate) fn listen(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    let callback = closure.as_ref().unchecked_ref();
    if let Err(e) = target.add_event_listener_with_callback(event, callback) {
        log::warn!("failed to listen for {event}: {}", js_error(&e));
    }
    closure.forget();
}

/// Elements of a `NodeList`, skipping non-element nodes.
pub(crate) fn elements(list: &web_sys::NodeList) -> Vec<web_sys::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}

pub(crate) fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn to_js(e: ThemeError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
