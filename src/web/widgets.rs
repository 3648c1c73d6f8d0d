//! Page widgets: password visibility, demo logins, mobile navigation, flash
//! messages, required-field validation, and fade-in.
//!
//! Each setup function is independent and silently does nothing when its
//! markup is absent.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
};

use crate::util::demo::{self, DemoCredentials};
use crate::util::{flash, form, password};

use super::{elements, js_error, listen};

const FADE_IN_ANIMATION: &str = "fadeIn 0.5s ease-out";

pub fn setup_all() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    setup_password_toggles(&document);
    setup_demo_accounts(&document);
    setup_mobile_navigation(&document);
    setup_flash_messages(&document);
    setup_form_validation(&document);
    setup_fade_in(&document);
}

fn select_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => elements(&list),
        Err(e) => {
            log::warn!("query {selector} failed: {}", js_error(&e));
            Vec::new()
        }
    }
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::debug!("style {property} not set: {}", js_error(&e));
    }
}

// =============================================================================
// PASSWORD VISIBILITY
// =============================================================================

pub fn setup_password_toggles(document: &Document) {
    for toggle in select_all(document, ".password-toggle") {
        let button = toggle.clone();
        listen(&toggle, "click", move |_| {
            let Some(field) = button
                .previous_element_sibling()
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            let next = password::toggled(&field.type_());
            field.set_type(next.input_type);

            let icon = button
                .query_selector("span")
                .ok()
                .flatten()
                .unwrap_or_else(|| button.clone());
            icon.set_text_content(Some(next.glyph));
            let _ = button.set_attribute("aria-label", next.aria_label);
        });
    }
}

// =============================================================================
// DEMO ACCOUNTS
// =============================================================================

pub fn setup_demo_accounts(document: &Document) {
    for button in select_all(document, ".demo-use-btn") {
        let source = button.clone();
        let document = document.clone();
        listen(&button, "click", move |_| {
            let Some(credentials) = demo_credentials(&source) else {
                return;
            };
            let username = input_by_id(&document, "username");
            let password = input_by_id(&document, "password");
            let (Some(username), Some(password)) = (username, password) else {
                return;
            };
            username.set_value(&credentials.username);
            password.set_value(&credentials.password);
            highlight(&username);
            highlight(&password);
        });
    }
}

fn demo_credentials(button: &Element) -> Option<DemoCredentials> {
    let account = button.closest(".demo-account").ok().flatten()?;
    let text = account
        .query_selector(".demo-credentials")
        .ok()
        .flatten()?
        .text_content()?;
    DemoCredentials::parse(&text)
}

fn input_by_id(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .ok()
}

fn highlight(field: &HtmlInputElement) {
    set_style(field, "border-color", demo::HIGHLIGHT_COLOR);
    let field = field.clone();
    let clear = move || set_style(&field, "border-color", "");
    Timeout::new(demo::HIGHLIGHT_MS, clear).forget();
}

// =============================================================================
// MOBILE NAVIGATION
// =============================================================================

pub fn setup_mobile_navigation(document: &Document) {
    let (Some(toggle), Some(nav)) = (
        document.get_element_by_id("mobile-nav-toggle"),
        document.get_element_by_id("mobile-nav"),
    ) else {
        return;
    };
    listen(&toggle, "click", move |_| {
        if let Err(e) = nav.class_list().toggle("show") {
            log::debug!("mobile nav toggle failed: {}", js_error(&e));
        }
    });
}

// =============================================================================
// FLASH MESSAGES
// =============================================================================

pub fn setup_flash_messages(document: &Document) {
    for alert in select_all(document, ".alert") {
        let Ok(alert) = alert.dyn_into::<HtmlElement>() else {
            continue;
        };

        let pending = alert.clone();
        let dismiss_later = move || fade_out(&pending);
        Timeout::new(flash::AUTO_DISMISS_MS, dismiss_later).forget();

        if let Ok(Some(dismiss)) = alert.query_selector(".alert-dismiss") {
            listen(&dismiss, "click", move |_| fade_out(&alert));
        }
    }
}

fn fade_out(alert: &HtmlElement) {
    set_style(alert, "opacity", flash::FADED_OPACITY);
    set_style(alert, "transform", flash::FADED_TRANSFORM);
    let alert = alert.clone();
    let remove = move || alert.remove();
    Timeout::new(flash::FADE_OUT_MS, remove).forget();
}

// =============================================================================
// FORM VALIDATION
// =============================================================================

pub fn setup_form_validation(document: &Document) {
    for form_el in select_all(document, "form") {
        let target = form_el.clone();
        listen(&form_el, "submit", move |event| {
            let Ok(required) = target.query_selector_all("[required]") else {
                return;
            };
            let fields: Vec<(HtmlElement, String)> = elements(&required)
                .into_iter()
                .filter_map(field_value)
                .collect();
            let result = form::validate_required(fields.iter().map(|(_, value)| value.as_str()));
            for ((field, _), blank) in fields.iter().zip(&result.blank) {
                let color = if *blank { form::INVALID_BORDER } else { "" };
                set_style(field, "border-color", color);
            }
            if !result.is_valid() {
                event.prevent_default();
                let blank = result.blank_count();
                log::debug!("form blocked: {blank} required fields empty");
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(form::MISSING_FIELDS_MESSAGE);
                }
            }
        });
    }
}

fn field_value(element: Element) -> Option<(HtmlElement, String)> {
    let value = if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        return None;
    };
    Some((element.dyn_into::<HtmlElement>().ok()?, value))
}

// =============================================================================
// FADE-IN
// =============================================================================

pub fn setup_fade_in(document: &Document) {
    for element in select_all(document, ".fade-in") {
        if let Ok(element) = element.dyn_into::<HtmlElement>() {
            set_style(&element, "animation", FADE_IN_ANIMATION);
        }
    }
}
