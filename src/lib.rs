//! # acadify-theme
//!
//! Browser-side presentation glue for the Acadify web application: the
//! light/dark/auto theme controller plus small page widgets (password
//! visibility, demo logins, mobile navigation, flash messages, required-field
//! validation).
//!
//! The theme state machine in `state` talks to its host only through the
//! capability traits in `state::host`, so it builds and tests natively. The
//! `web` module, compiled with the `hydrate` feature, implements those traits
//! over web-sys and boots everything when the wasm module loads.

pub mod config;
pub mod error;
pub mod net;
pub mod state;
pub mod util;
#[cfg(feature = "hydrate")]
pub mod web;

pub use config::ThemeConfig;
pub use error::ThemeError;
pub use state::controller::ThemePreferenceController;
pub use state::theme::{EffectiveTheme, ThemePreference};
