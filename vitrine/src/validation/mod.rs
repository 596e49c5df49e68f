//! Field validation for the contact form.
//!
//! Validation is a pure mapping from a field's kind, `required` flag and raw
//! value to a [`ValidationVerdict`]. Nothing in this module touches the
//! document, so it can be exercised without a page.
//!
//! # Example
//!
//! ```ignore
//! use vitrine::validation::{FieldKind, FieldValidator};
//!
//! let validator = FieldValidator::default();
//!
//! assert!(validator.check(FieldKind::Email, true, "a@b.c").is_valid());
//! assert!(!validator.check(FieldKind::Tel, false, "abc123").is_valid());
//! assert!(validator.check(FieldKind::Tel, false, "   ").is_valid());
//! ```

mod error_display;
mod field;
mod result;
mod validator;
mod verdict;

pub use error_display::ErrorDisplay;
pub use field::{Field, FieldKind, FieldStatus};
pub use result::{FieldError, ValidationResult};
pub use validator::{FieldValidator, Messages, is_valid_email, is_valid_phone};
pub use verdict::ValidationVerdict;
