//! Password visibility toggle state.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

pub const SHOWN_GLYPH: &str = "\u{1F441}\u{FE0F}";
pub const HIDDEN_GLYPH: &str = "\u{1F441}\u{FE0F}\u{200D}\u{1F5E8}\u{FE0F}";

/// What the field and its button should look like after one click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visibility {
    pub input_type: &'static str,
    pub glyph: &'static str,
    pub aria_label: &'static str,
}

/// State after clicking the toggle for a field whose type is `current_type`.
///
/// Any type other than `password` is treated as currently visible.
pub fn toggled(current_type: &str) -> Visibility {
    if current_type == "password" {
        Visibility {
            input_type: "text",
            glyph: SHOWN_GLYPH,
            aria_label: "Hide password",
        }
    } else {
        Visibility {
            input_type: "password",
            glyph: HIDDEN_GLYPH,
            aria_label: "Show password",
        }
    }
}
