//! Flash message dismissal timing and styling.

/// Delay before an untouched flash message starts fading.
pub const AUTO_DISMISS_MS: u32 = 5_000;
/// Fade duration before the element is removed.
pub const FADE_OUT_MS: u32 = 300;

pub const FADED_OPACITY: &str = "0";
pub const FADED_TRANSFORM: &str = "translateY(-10px)";
