use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::*;
use crate::state::host::{OptionHandler, SchemeListener, ToggleHandler};
use crate::state::theme::{DARK_INDICATOR, LIGHT_INDICATOR};

// =============================================================
// In-memory host
// =============================================================

const KEY: &str = "acadify-theme";

#[derive(Clone, Default)]
struct FakeStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
    reject_writes: Rc<Cell<bool>>,
}

impl FakeStorage {
    fn stored(&self) -> Option<String> {
        self.items.borrow().get(KEY).cloned()
    }
}

impl Storage for FakeStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.reject_writes.get() {
            return Err(ThemeError::Storage("quota exceeded".into()));
        }
        self.writes.set(self.writes.get() + 1);
        self.items
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[derive(Clone, Default)]
struct FakeScheme {
    dark: Rc<Cell<bool>>,
    listeners: Rc<RefCell<Vec<SchemeListener>>>,
}

impl FakeScheme {
    fn flip(&self, dark: bool) {
        self.dark.set(dark);
        for listener in self.listeners.borrow().iter() {
            listener(dark);
        }
    }
}

impl ColorSchemeSource for FakeScheme {
    fn prefers_dark(&self) -> bool {
        self.dark.get()
    }

    fn subscribe(&self, listener: SchemeListener) -> Result<(), ThemeError> {
        self.listeners.borrow_mut().push(listener);
        Ok(())
    }
}

#[derive(Clone, Default)]
struct FakeDocument {
    theme: Rc<RefCell<Option<String>>>,
    indicator: Rc<RefCell<Option<String>>>,
    toggle: Rc<RefCell<Option<(ThemePreference, String)>>>,
}

impl DocumentThemeSink for FakeDocument {
    fn set_theme(&self, theme: EffectiveTheme) -> Result<(), ThemeError> {
        *self.theme.borrow_mut() = Some(theme.as_str().to_owned());
        Ok(())
    }

    fn theme(&self) -> Option<String> {
        self.theme.borrow().clone()
    }

    fn set_indicator(&self, glyph: &str) {
        *self.indicator.borrow_mut() = Some(glyph.to_owned());
    }

    fn set_toggle_state(&self, preference: ThemePreference, description: &str) {
        *self.toggle.borrow_mut() = Some((preference, description.to_owned()));
    }
}

#[derive(Clone, Default)]
struct FakeSync {
    sent: Rc<RefCell<Vec<ThemePreference>>>,
}

impl ThemeSync for FakeSync {
    fn dispatch(&self, preference: ThemePreference) {
        self.sent.borrow_mut().push(preference);
    }
}

#[derive(Default)]
struct FakeControls {
    toggle: RefCell<Option<ToggleHandler>>,
    options: RefCell<Option<OptionHandler>>,
}

impl FakeControls {
    fn click(&self) {
        let toggle = self.toggle.borrow();
        (toggle.as_ref().expect("toggle bound"))();
    }

    fn select(&self, preference: ThemePreference) {
        let options = self.options.borrow();
        (options.as_ref().expect("options bound"))(preference);
    }
}

impl ThemeControls for FakeControls {
    fn bind_toggle(&self, on_toggle: ToggleHandler) {
        *self.toggle.borrow_mut() = Some(on_toggle);
    }

    fn bind_options(&self, on_select: OptionHandler) {
        *self.options.borrow_mut() = Some(on_select);
    }
}

struct Harness {
    controller: Rc<ThemePreferenceController>,
    storage: FakeStorage,
    scheme: FakeScheme,
    document: FakeDocument,
    sync: FakeSync,
    controls: FakeControls,
}

impl Harness {
    fn preference(&self) -> ThemePreference {
        self.controller.get_preference().unwrap()
    }

    fn effective(&self) -> EffectiveTheme {
        self.controller.get_effective_theme()
    }

    fn indicator(&self) -> Option<String> {
        self.document.indicator.borrow().clone()
    }
}

fn harness(stored: Option<&str>, system_dark: bool) -> Harness {
    let storage = FakeStorage::default();
    if let Some(value) = stored {
        storage
            .items
            .borrow_mut()
            .insert(KEY.to_owned(), value.to_owned());
    }
    let scheme = FakeScheme::default();
    scheme.dark.set(system_dark);
    let document = FakeDocument::default();
    let sync = FakeSync::default();
    let controller = Rc::new(ThemePreferenceController::new(
        &ThemeConfig::default(),
        storage.clone(),
        scheme.clone(),
        document.clone(),
        sync.clone(),
    ));
    Harness {
        controller,
        storage,
        scheme,
        document,
        sync,
        controls: FakeControls::default(),
    }
}

fn initialized(stored: Option<&str>, system_dark: bool) -> Harness {
    let h = harness(stored, system_dark);
    h.controller.initialize(&h.controls).unwrap();
    h
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_with_empty_storage_follows_dark_system() {
    let h = initialized(None, true);
    assert_eq!(h.effective(), EffectiveTheme::Dark);
    assert_eq!(h.preference(), ThemePreference::Auto);
    assert_eq!(h.storage.stored(), None);
    assert_eq!(h.storage.writes.get(), 0);
}

#[test]
fn initialize_applies_stored_preference() {
    let h = initialized(Some("dark"), false);
    assert_eq!(h.effective(), EffectiveTheme::Dark);
    assert_eq!(h.indicator().as_deref(), Some(DARK_INDICATOR));
    assert_eq!(
        *h.document.toggle.borrow(),
        Some((ThemePreference::Dark, "Current theme: dark".to_owned()))
    );
}

#[test]
fn initialize_treats_unknown_stored_value_as_auto() {
    let h = initialized(Some("sepia"), true);
    assert_eq!(h.preference(), ThemePreference::Auto);
    assert_eq!(h.effective(), EffectiveTheme::Dark);
}

#[test]
fn initialize_subscribes_and_binds_controls() {
    let h = initialized(None, false);
    assert_eq!(h.scheme.listeners.borrow().len(), 1);
    assert!(h.controls.toggle.borrow().is_some());
    assert!(h.controls.options.borrow().is_some());
}

#[test]
fn initialize_syncs_preference_once() {
    let h = initialized(None, true);
    assert_eq!(*h.sync.sent.borrow(), vec![ThemePreference::Auto]);
}

// =============================================================
// set_preference
// =============================================================

#[test]
fn explicit_preference_ignores_system_scheme() {
    for system_dark in [false, true] {
        let h = harness(None, system_dark);
        h.controller.set_preference(ThemePreference::Light).unwrap();
        assert_eq!(h.effective(), EffectiveTheme::Light);
        h.controller.set_preference(ThemePreference::Dark).unwrap();
        assert_eq!(h.effective(), EffectiveTheme::Dark);
    }
}

#[test]
fn auto_preference_uses_system_scheme_at_call_time() {
    let h = harness(Some("light"), true);
    h.controller.set_preference(ThemePreference::Auto).unwrap();
    assert_eq!(h.effective(), EffectiveTheme::Dark);

    h.scheme.dark.set(false);
    h.controller.set_preference(ThemePreference::Auto).unwrap();
    assert_eq!(h.effective(), EffectiveTheme::Light);
}

#[test]
fn set_preference_persists_and_updates_toggle() {
    let h = harness(None, false);
    h.controller.set_preference(ThemePreference::Dark).unwrap();
    assert_eq!(h.storage.stored().as_deref(), Some("dark"));
    assert_eq!(h.indicator().as_deref(), Some(DARK_INDICATOR));
    assert_eq!(
        *h.document.toggle.borrow(),
        Some((ThemePreference::Dark, "Current theme: dark".to_owned()))
    );
}

#[test]
fn set_preference_twice_is_stable() {
    let h = harness(None, true);
    h.controller.set_preference(ThemePreference::Light).unwrap();
    let theme = h.effective();
    let stored = h.storage.stored();

    h.controller.set_preference(ThemePreference::Light).unwrap();
    assert_eq!(h.effective(), theme);
    assert_eq!(h.storage.stored(), stored);
}

#[test]
fn set_preference_syncs_preference_not_effective_theme() {
    let h = harness(None, true);
    h.controller.set_preference(ThemePreference::Auto).unwrap();
    assert_eq!(*h.sync.sent.borrow(), vec![ThemePreference::Auto]);
}

#[test]
fn set_preference_propagates_storage_failure_without_applying() {
    let h = harness(None, false);
    h.storage.reject_writes.set(true);
    let result = h.controller.set_preference(ThemePreference::Dark);
    let err = result.unwrap_err();
    assert_eq!(err, ThemeError::Storage("quota exceeded".into()));
    assert_eq!(h.document.theme(), None);
    assert!(h.sync.sent.borrow().is_empty());
}

// =============================================================
// Host scheme changes
// =============================================================

#[test]
fn auto_preference_tracks_scheme_flips() {
    let h = initialized(None, false);
    h.controller.set_preference(ThemePreference::Auto).unwrap();

    h.scheme.flip(true);
    assert_eq!(h.effective(), EffectiveTheme::Dark);
    assert_eq!(h.indicator().as_deref(), Some(DARK_INDICATOR));

    h.scheme.flip(false);
    assert_eq!(h.effective(), EffectiveTheme::Light);
    assert_eq!(h.indicator().as_deref(), Some(LIGHT_INDICATOR));
}

#[test]
fn explicit_preference_ignores_scheme_flips() {
    let h = initialized(None, false);
    h.controller.set_preference(ThemePreference::Dark).unwrap();
    let synced = h.sync.sent.borrow().len();

    h.scheme.flip(false);
    h.scheme.flip(true);
    h.scheme.flip(false);
    assert_eq!(h.effective(), EffectiveTheme::Dark);
    assert_eq!(h.sync.sent.borrow().len(), synced);
}

#[test]
fn stored_dark_survives_flip_to_light() {
    let h = initialized(Some("dark"), true);
    h.scheme.flip(false);
    assert_eq!(h.effective(), EffectiveTheme::Dark);
}

#[test]
fn unknown_stored_value_follows_scheme_flips() {
    let h = initialized(Some("sepia"), false);
    h.scheme.flip(true);
    assert_eq!(h.effective(), EffectiveTheme::Dark);
    assert_eq!(h.storage.stored().as_deref(), Some("sepia"));
}

#[test]
fn scheme_flip_under_auto_does_not_write_storage() {
    let h = initialized(None, false);
    h.scheme.flip(true);
    assert_eq!(h.storage.writes.get(), 0);
    assert_eq!(h.effective(), EffectiveTheme::Dark);
}

#[test]
fn scheme_listener_is_inert_after_controller_drop() {
    let h = initialized(None, false);
    let Harness { controller, scheme, document, .. } = h;
    drop(controller);
    scheme.flip(true);
    assert_eq!(document.theme().as_deref(), Some("light"));
}

// =============================================================
// Toggle and options
// =============================================================

#[test]
fn toggle_cycles_light_dark_auto_light() {
    let h = initialized(Some("light"), false);
    h.controls.click();
    assert_eq!(h.preference(), ThemePreference::Dark);
    h.controls.click();
    assert_eq!(h.preference(), ThemePreference::Auto);
    h.controls.click();
    assert_eq!(h.preference(), ThemePreference::Light);
}

#[test]
fn toggle_from_unset_goes_to_light() {
    let h = initialized(None, true);
    assert_eq!(
        h.controller.handle_toggle().unwrap(),
        ThemePreference::Light
    );
    assert_eq!(h.effective(), EffectiveTheme::Light);
}

#[test]
fn toggle_into_auto_resolves_against_system() {
    let h = initialized(Some("dark"), false);
    h.controls.click();
    assert_eq!(h.preference(), ThemePreference::Auto);
    assert_eq!(h.effective(), EffectiveTheme::Light);
}

#[test]
fn option_selection_sets_preference_directly() {
    let h = initialized(Some("light"), true);
    h.controls.select(ThemePreference::Auto);
    assert_eq!(h.preference(), ThemePreference::Auto);
    assert_eq!(h.effective(), EffectiveTheme::Dark);

    h.controls.select(ThemePreference::Light);
    assert_eq!(h.storage.stored().as_deref(), Some("light"));
}

// =============================================================
// Reads
// =============================================================

#[test]
fn effective_theme_defaults_to_light_when_unset() {
    let h = harness(None, true);
    assert_eq!(h.effective(), EffectiveTheme::Light);
}

#[test]
fn effective_theme_defaults_to_light_when_attribute_is_garbage() {
    let h = harness(None, true);
    *h.document.theme.borrow_mut() = Some("neon".to_owned());
    assert_eq!(h.effective(), EffectiveTheme::Light);
}
