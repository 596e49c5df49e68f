use vitrine_dom::{Element, Tag};

use super::ValidationVerdict;

/// Kind of a form field, derived from its tag and `type` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Tel,
    Textarea,
    Select,
}

impl FieldKind {
    /// Classify an element, or `None` if it does not hold form data.
    ///
    /// Inputs of unknown type are treated as text; buttons and button-like
    /// inputs are not fields.
    pub fn of(element: &Element) -> Option<Self> {
        match element.tag {
            Tag::Textarea => Some(Self::Textarea),
            Tag::Select => Some(Self::Select),
            Tag::Input => match element.input_type().as_deref() {
                Some("email") => Some(Self::Email),
                Some("tel") => Some(Self::Tel),
                Some("submit" | "button" | "reset" | "image") => None,
                _ => Some(Self::Text),
            },
            _ => None,
        }
    }
}

/// Per-field validation state.
///
/// `Untouched` until the first blur or forced validation, then `Valid` or
/// `Invalid` with the message shown to the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldStatus {
    #[default]
    Untouched,
    Valid,
    Invalid(String),
}

impl FieldStatus {
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    pub fn is_touched(&self) -> bool {
        !matches!(self, Self::Untouched)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Invalid(message) => Some(message),
            _ => None,
        }
    }
}

impl From<&ValidationVerdict> for FieldStatus {
    fn from(verdict: &ValidationVerdict) -> Self {
        match verdict.message() {
            Some(message) => Self::Invalid(message.to_string()),
            None => Self::Valid,
        }
    }
}

/// One form control and its validation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Element ID of the control.
    pub id: String,
    /// Submitted name (the `name` attribute, or the ID when absent).
    pub name: String,
    pub kind: FieldKind,
    /// Raw value, untrimmed.
    pub value: String,
    /// Value from the markup, restored by a form reset.
    pub initial: String,
    pub required: bool,
    pub status: FieldStatus,
}

impl Field {
    pub fn new(id: impl Into<String>, kind: FieldKind) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            kind,
            value: String::new(),
            initial: String::new(),
            required: false,
            status: FieldStatus::Untouched,
        }
    }

    /// Build a field from a document element.
    pub fn from_element(element: &Element) -> Option<Self> {
        let kind = FieldKind::of(element)?;
        Some(Self {
            id: element.id.clone(),
            name: element
                .get_attr("name")
                .map(str::to_string)
                .unwrap_or_else(|| element.id.clone()),
            kind,
            value: element.value.clone(),
            initial: element.value.clone(),
            required: element.is_required(),
            status: FieldStatus::Untouched,
        })
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}
