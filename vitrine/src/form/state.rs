use vitrine_dom::{Document, Tag};

use crate::error::ConfigurationError;
use crate::validation::{Field, FieldValidator};

/// Name/value pairs of a form, in document order.
pub type FormData = Vec<(String, String)>;

/// The fields of one form, in document order.
///
/// Aggregate validity is never stored; it is recomputed from the fields on
/// demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    form_id: String,
    fields: Vec<Field>,
}

impl FormState {
    pub fn new(form_id: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            form_id: form_id.into(),
            fields,
        }
    }

    /// Collect the fields of a form element from the document.
    pub fn parse(document: &Document, form_id: &str) -> Result<Self, ConfigurationError> {
        let form = document
            .get(form_id)
            .ok_or_else(|| ConfigurationError::MissingElement(form_id.to_string()))?;
        if form.tag != Tag::Form {
            return Err(ConfigurationError::MissingElement(form_id.to_string()));
        }

        let fields = document
            .select(form_id, |element| element.is_form_control())
            .iter()
            .filter_map(|id| document.get(id))
            .filter_map(Field::from_element)
            .collect();

        Ok(Self::new(form_id, fields))
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        self.fields.iter_mut()
    }

    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.id == id)
    }

    pub fn field_mut(&mut self, id: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|field| field.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.field(id).is_some()
    }

    /// IDs of the required fields, in document order.
    pub fn required_ids(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|field| field.required)
            .map(|field| field.id.clone())
            .collect()
    }

    /// Copy the latest value of a field out of the document.
    pub fn sync_value(&mut self, document: &Document, id: &str) -> Option<&mut Field> {
        let value = document.get(id)?.value.clone();
        let field = self.field_mut(id)?;
        field.value = value;
        Some(field)
    }

    /// Copy the latest value of every field out of the document.
    pub fn sync_all(&mut self, document: &Document) {
        for field in &mut self.fields {
            if let Some(element) = document.get(&field.id) {
                field.value = element.value.clone();
            }
        }
    }

    /// Whether every required field validates right now.
    ///
    /// Non-required fields never block submission.
    pub fn is_submit_eligible(&self, validator: &FieldValidator) -> bool {
        self.fields
            .iter()
            .filter(|field| field.required)
            .all(|field| validator.validate(field).is_valid())
    }

    /// Name/value pairs to submit.
    pub fn payload(&self) -> FormData {
        self.fields
            .iter()
            .map(|field| (field.name.clone(), field.value.clone()))
            .collect()
    }

    /// Put every field back to its markup value and clear its status, in
    /// the state and in the document.
    pub fn reset(&mut self, document: &mut Document) {
        for field in &mut self.fields {
            field.value.clone_from(&field.initial);
            field.status = Default::default();
            document.set_value(&field.id, field.initial.clone());
        }
    }
}
