//! Required-field validation.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

pub const INVALID_BORDER: &str = "#ef4444";
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Outcome of validating a form's required fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation {
    /// Per-field result, in input order; `true` means the field is blank.
    pub blank: Vec<bool>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        !self.blank.iter().any(|b| *b)
    }

    pub fn blank_count(&self) -> usize {
        self.blank.iter().filter(|b| **b).count()
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Check every required value; a whitespace-only value counts as missing.
pub fn validate_required<'a>(values: impl IntoIterator<Item = &'a str>) -> Validation {
    Validation {
        blank: values.into_iter().map(is_blank).collect(),
    }
}
