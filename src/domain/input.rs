//! Model of the CPF/CNPJ text field used by the login and payment forms.
//!
//! The field shows the progressively formatted value but always reports the
//! digit-only value to its consumer, so that feeding the reported value back
//! into the field never formats an already formatted string.

use serde::Serialize;

use super::display::format_tax_id_for_display;
use super::tax_id::{classify_tax_id, normalize_digits, TaxId, CNPJ_LENGTH};

/// Control keys the field lets through besides digits.
const CONTROL_KEYS: &[&str] = &["Backspace", "Delete", "ArrowLeft", "ArrowRight", "Tab"];

/// What the field emits after each edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldChange {
    /// Text shown in the input.
    pub display: String,
    /// Canonical digit-only value handed to the form.
    pub value: String,
}

/// Tax id input field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaxIdField {
    value: String,
}

impl TaxIdField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Field pre-filled with a stored value.
    #[must_use]
    pub fn with_value(raw: &str) -> Self {
        let mut field = Self::new();
        field.change(raw);
        field
    }

    /// Whether a key press should reach the field.
    #[must_use]
    pub fn accepts_key(key: &str) -> bool {
        let mut chars = key.chars();
        let single_digit = matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_digit());
        single_digit || CONTROL_KEYS.contains(&key)
    }

    /// Apply the raw text currently in the input.
    pub fn change(&mut self, raw: &str) -> FieldChange {
        let mut digits = normalize_digits(raw);
        digits.truncate(CNPJ_LENGTH);
        self.value = digits;

        FieldChange {
            display: format_tax_id_for_display(&self.value),
            value: self.value.clone(),
        }
    }

    /// Canonical digit-only value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Formatted text for the input.
    #[must_use]
    pub fn display(&self) -> String {
        format_tax_id_for_display(&self.value)
    }

    /// Classification of the current value, used to gate submission.
    #[must_use]
    pub fn validate(&self) -> TaxId {
        classify_tax_id(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaxIdKind;

    #[test]
    fn change_reports_digits_not_display() {
        let mut field = TaxIdField::new();
        let change = field.change("529982");

        assert_eq!(change.display, "529.982");
        assert_eq!(change.value, "529982");
    }

    #[test]
    fn feeding_display_back_is_stable() {
        let mut field = TaxIdField::new();
        let first = field.change("52998224725");
        let second = field.change(&first.display);

        assert_eq!(first, second);
        assert_eq!(field.value(), "52998224725");
    }

    #[test]
    fn value_is_capped_at_cnpj_length() {
        let mut field = TaxIdField::new();
        let change = field.change("1122233300018199");

        assert_eq!(change.value, "11222333000181");
        assert_eq!(change.display, "11.222.333/0001-81");
        assert_eq!(field.validate().kind(), TaxIdKind::Cnpj);
    }

    #[test]
    fn with_value_formats_initial_display() {
        let field = TaxIdField::with_value("52998224725");
        assert_eq!(field.display(), "529.982.247-25");
        assert!(field.validate().is_valid());
        assert!(!TaxIdField::new().validate().is_valid());
    }

    #[test]
    fn key_filter() {
        for key in ["0", "9", "Backspace", "Delete", "ArrowLeft", "ArrowRight", "Tab"] {
            assert!(TaxIdField::accepts_key(key), "{key}");
        }
        for key in ["a", ".", "-", "12", "", "Enter", " "] {
            assert!(!TaxIdField::accepts_key(key), "{key}");
        }
    }
}
