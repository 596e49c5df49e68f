//! Per-field and whole-form validation driven by page events.

use vitrine_dom::Document;

use super::FormState;
use crate::config::FormConfig;
use crate::error::ConfigurationError;
use crate::presenter::ErrorPresenter;
use crate::validation::{FieldError, FieldStatus, FieldValidator, ValidationResult, ValidationVerdict};

/// Runs the validator on page events and keeps field status and error
/// annotations in step.
///
/// Field transitions: `Untouched -> Valid | Invalid` on blur or forced
/// validation; input events only re-check a field that is already `Invalid`.
#[derive(Debug, Clone, Default)]
pub struct FormValidationController {
    validator: FieldValidator,
    presenter: ErrorPresenter,
}

impl FormValidationController {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            validator: FieldValidator::new(config.messages.clone()),
            presenter: ErrorPresenter::new(config),
        }
    }

    pub fn validator(&self) -> &FieldValidator {
        &self.validator
    }

    pub fn presenter(&self) -> &ErrorPresenter {
        &self.presenter
    }

    /// Blur: always validate and show the result.
    pub fn on_blur(
        &self,
        document: &mut Document,
        form: &mut FormState,
        field_id: &str,
    ) -> Option<ValidationVerdict> {
        self.check_field(document, form, field_id)
    }

    /// Input: re-validate only if the field currently shows an error, so that
    /// nothing is flagged while the visitor is still typing.
    pub fn on_input(
        &self,
        document: &mut Document,
        form: &mut FormState,
        field_id: &str,
    ) -> Option<ValidationVerdict> {
        let field = form.sync_value(document, field_id)?;
        if !field.status.is_invalid() {
            return None;
        }
        self.check_field(document, form, field_id)
    }

    /// Submit attempt: force-validate every required field.
    ///
    /// All required fields are checked (no short-circuit) so every error is
    /// visible at once. Non-required fields are left as they are.
    pub fn validate_for_submit(&self, document: &mut Document, form: &mut FormState) -> ValidationResult {
        let mut errors = Vec::new();

        for field_id in form.required_ids() {
            let message = self
                .check_field(document, form, &field_id)
                .and_then(|verdict| verdict.message().map(str::to_string));
            if let Some(message) = message {
                errors.push(FieldError { field_id, message });
            }
        }

        let result = ValidationResult::from_errors(errors);
        log::debug!(
            "FormValidationController: submit check on '{}' found {} error(s)",
            form.form_id(),
            result.errors().len()
        );
        result
    }

    /// Remove error state from every field.
    pub fn clear_all(&self, document: &mut Document, form: &mut FormState) {
        for field in form.fields_mut() {
            field.status = FieldStatus::Untouched;
            if let Err(e) = self.presenter.clear(document, &field.id) {
                log::warn!("FormValidationController: {e}");
            }
        }
    }

    /// Validate one field against its latest value, present the verdict and
    /// record the new status.
    fn check_field(
        &self,
        document: &mut Document,
        form: &mut FormState,
        field_id: &str,
    ) -> Option<ValidationVerdict> {
        let Some(field) = form.sync_value(document, field_id) else {
            log::warn!(
                "FormValidationController: {}",
                ConfigurationError::NotAField(field_id.to_string())
            );
            return None;
        };

        let verdict = self.validator.validate(field);
        field.status = FieldStatus::from(&verdict);

        if let Err(e) = self.presenter.present(document, field_id, &verdict) {
            log::warn!("FormValidationController: {e}");
        }
        Some(verdict)
    }
}
