//! Demo account credential parsing.

#[cfg(test)]
#[path = "demo_test.rs"]
mod demo_test;

/// Border color flashed on filled login fields.
pub const HIGHLIGHT_COLOR: &str = "#10b981";
/// How long the highlight stays before it is cleared.
pub const HIGHLIGHT_MS: u32 = 2_000;

const SEPARATOR: &str = " / ";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoCredentials {
    pub username: String,
    pub password: String,
}

impl DemoCredentials {
    /// Parse the `username / password` text shown on a demo account card.
    ///
    /// Returns `None` when the separator is missing.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.trim().split(SEPARATOR);
        let username = parts.next()?;
        let password = parts.next()?;
        Some(Self {
            username: username.to_owned(),
            password: password.to_owned(),
        })
    }
}
