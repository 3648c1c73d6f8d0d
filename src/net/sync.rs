//! Best-effort theme preference sync.
//!
//! Client-side (hydrate): `POST` via `gloo-net` on the local executor.
//! Native builds only expose the payload and the no-op notifier.
//!
//! ERROR HANDLING
//! ==============
//! The request is spawned and forgotten. Transport errors and non-OK statuses
//! are logged; nothing is retried and nothing reaches the controller.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use serde::Serialize;

use crate::state::host::ThemeSync;
use crate::state::theme::ThemePreference;

/// JSON body sent to the sync endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeSyncPayload {
    pub theme: ThemePreference,
}

impl ThemeSyncPayload {
    pub fn new(theme: ThemePreference) -> Self {
        Self { theme }
    }
}

/// Notifier used when sync is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSync;

impl ThemeSync for NoopSync {
    fn dispatch(&self, preference: ThemePreference) {
        log::debug!("theme sync disabled, not sending {preference}");
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn sync_failed_message(status: u16) -> String {
    format!("theme sync failed: status {status}")
}

/// Posts the preference to a fixed endpoint without awaiting the result.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone)]
pub struct HttpThemeSync {
    endpoint: std::rc::Rc<str>,
}

#[cfg(feature = "hydrate")]
impl HttpThemeSync {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

#[cfg(feature = "hydrate")]
impl ThemeSync for HttpThemeSync {
    fn dispatch(&self, preference: ThemePreference) {
        let endpoint = std::rc::Rc::clone(&self.endpoint);
        wasm_bindgen_futures::spawn_local(async move {
            let payload = ThemeSyncPayload::new(preference);
            let request = match gloo_net::http::Request::post(&endpoint).json(&payload) {
                Ok(request) => request,
                Err(e) => {
                    log::warn!("theme sync failed: {e}");
                    return;
                }
            };
            match request.send().await {
                Ok(resp) if !resp.ok() => log::warn!("{}", sync_failed_message(resp.status())),
                Ok(_) => log::debug!("theme sync sent: {preference}"),
                Err(e) => log::warn!("theme sync failed: {e}"),
            }
        });
    }
}
