//! Inline error presentation for form fields.

use vitrine_dom::{Document, Element};

use crate::config::FormConfig;
use crate::error::ConfigurationError;
use crate::validation::{ErrorDisplay, FieldStatus, ValidationVerdict};

/// Attribute linking an annotation back to its field.
pub const ERROR_FOR_ATTR: &str = "data-error-for";

/// Renders a field's validation status into the document.
///
/// Holds only configuration: everything it draws is derived from the status
/// it is given. A field has at most one annotation at any time.
#[derive(Debug, Clone)]
pub struct ErrorPresenter {
    error_class: String,
    annotation_class: String,
    display: ErrorDisplay,
}

impl Default for ErrorPresenter {
    fn default() -> Self {
        Self::new(&FormConfig::default())
    }
}

impl ErrorPresenter {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            error_class: config.error_class.clone(),
            annotation_class: config.annotation_class.clone(),
            display: config.error_display,
        }
    }

    /// Preferred element ID of the annotation for a field.
    ///
    /// Used only when the page does not already have an element with that ID.
    pub fn annotation_id(field_id: &str) -> String {
        format!("{field_id}-error")
    }

    /// Reflect a verdict on the field.
    pub fn present(
        &self,
        document: &mut Document,
        field_id: &str,
        verdict: &ValidationVerdict,
    ) -> Result<(), ConfigurationError> {
        self.render(document, field_id, &FieldStatus::from(verdict))
    }

    /// Remove any error state from the field.
    pub fn clear(&self, document: &mut Document, field_id: &str) -> Result<(), ConfigurationError> {
        self.render(document, field_id, &FieldStatus::Untouched)
    }

    /// Translate a status into the error class and the annotation.
    pub fn render(
        &self,
        document: &mut Document,
        field_id: &str,
        status: &FieldStatus,
    ) -> Result<(), ConfigurationError> {
        let field = document
            .get_mut(field_id)
            .ok_or_else(|| ConfigurationError::MissingElement(field_id.to_string()))?;
        field.set_class(&self.error_class, status.is_invalid());

        for id in self.annotations_for(document, field_id) {
            document.remove(&id);
        }

        let Some(message) = status.message() else {
            return Ok(());
        };

        let mut annotation = Element::div()
            .class(self.annotation_class.as_str())
            .attr(ERROR_FOR_ATTR, field_id)
            .child(Element::text(message));
        let preferred_id = Self::annotation_id(field_id);
        if !document.exists(&preferred_id) {
            annotation = annotation.id(preferred_id);
        }

        let inserted = match self.display {
            ErrorDisplay::AfterField => document.insert_after(field_id, annotation),
            ErrorDisplay::EndOfParent => match document.parent_id(field_id) {
                Some(parent) => document.append_child(&parent, annotation),
                None => false,
            },
        };

        if !inserted {
            log::warn!("ErrorPresenter: no place for the annotation of '{field_id}'");
        }
        Ok(())
    }

    /// IDs of the annotations this presenter drew for a field.
    ///
    /// Author markup is never matched, even when it reuses the annotation ID.
    pub fn annotations_for(&self, document: &Document, field_id: &str) -> Vec<String> {
        let root = document.root().id.clone();
        document.select(&root, |element| {
            element.has_class(&self.annotation_class)
                && element.get_attr(ERROR_FOR_ATTR) == Some(field_id)
        })
    }

    /// Whether the field currently shows an annotation.
    pub fn has_annotation(&self, document: &Document, field_id: &str) -> bool {
        !self.annotations_for(document, field_id).is_empty()
    }
}
