//! The field validator.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::field::{Field, FieldKind};
use super::verdict::ValidationVerdict;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email pattern"));

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-\s()]+$").expect("Invalid phone pattern"));

/// Check an email address against `local@domain.tld` with no whitespace or extra `@`.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Check that a phone number only uses digits, `+`, `-`, whitespace and parentheses.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

/// Messages shown for each failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub required: String,
    pub email: String,
    pub tel: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            required: "Ce champ est obligatoire".to_string(),
            email: "Veuillez entrer une adresse email valide".to_string(),
            tel: "Veuillez entrer un numéro de téléphone valide".to_string(),
        }
    }
}

/// Maps a field's kind, constraints and value to a verdict.
#[derive(Debug, Clone, Default)]
pub struct FieldValidator {
    messages: Messages,
}

impl FieldValidator {
    pub fn new(messages: Messages) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Validate a field's current value.
    pub fn validate(&self, field: &Field) -> ValidationVerdict {
        self.check(field.kind, field.required, &field.value)
    }

    /// Validate a raw value for the given kind and `required` flag.
    ///
    /// The value is trimmed first. An empty value only fails when required;
    /// format rules apply to non-empty values.
    pub fn check(&self, kind: FieldKind, required: bool, raw: &str) -> ValidationVerdict {
        let value = raw.trim();

        if value.is_empty() {
            return if required {
                ValidationVerdict::invalid(&self.messages.required)
            } else {
                ValidationVerdict::valid()
            };
        }

        match kind {
            FieldKind::Email if !is_valid_email(value) => {
                ValidationVerdict::invalid(&self.messages.email)
            }
            FieldKind::Tel if !is_valid_phone(value) => ValidationVerdict::invalid(&self.messages.tel),
            _ => ValidationVerdict::valid(),
        }
    }
}
