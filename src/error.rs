//! Error type shared by the theme state machine and its host bindings.

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while reading, applying, or persisting the theme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// A stored or selected value is not one of `auto`, `light`, `dark`.
    #[error("invalid theme preference: {0:?}")]
    InvalidPreference(String),

    /// A document theme value is not one of `light`, `dark`.
    #[error("invalid effective theme: {0:?}")]
    InvalidTheme(String),

    /// Durable client storage is unavailable or rejected the operation.
    #[error("storage failed: {0}")]
    Storage(String),

    /// The host color-scheme signal could not be read or observed.
    #[error("color scheme unavailable: {0}")]
    ColorScheme(String),

    /// The document or one of its elements could not be reached.
    #[error("document unavailable: {0}")]
    Document(String),

    /// A configuration override could not be parsed.
    #[error("config parse failed: {0}")]
    Config(String),
}
