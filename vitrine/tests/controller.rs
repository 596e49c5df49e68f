//! Tests for field state and the validation controller.

use vitrine::config::FormConfig;
use vitrine::error::ConfigurationError;
use vitrine::form::{FormState, FormValidationController};
use vitrine::presenter::ErrorPresenter;
use vitrine::validation::FieldStatus;
use vitrine_dom::{Document, Element};

fn contact_document() -> Document {
    Document::new(
        Element::html().id("root").child(
            Element::form().id("contactForm").children([
                Element::input("text").id("name").name("name").required(),
                Element::input("email").id("email").name("email").required(),
                Element::input("tel").id("phone").name("phone"),
                Element::textarea().id("message").name("message").required(),
                Element::button("Envoyer").id("submit").attr("type", "submit"),
            ]),
        ),
    )
}

fn setup() -> (Document, FormState, FormValidationController) {
    let document = contact_document();
    let form = FormState::parse(&document, "contactForm").unwrap();
    (document, form, FormValidationController::new(&FormConfig::default()))
}

fn status(form: &FormState, id: &str) -> FieldStatus {
    form.field(id).unwrap().status.clone()
}

// ============================================================================
// FormState
// ============================================================================

#[test]
fn test_parse_collects_controls_in_order() {
    let (_, form, _) = setup();
    let ids: Vec<&str> = form.fields().iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["name", "email", "phone", "message"]);
    assert_eq!(form.required_ids(), vec!["name", "email", "message"]);
}

#[test]
fn test_parse_rejects_missing_or_non_form() {
    let document = contact_document();
    assert!(FormState::parse(&document, "nope").is_err());
    assert!(FormState::parse(&document, "name").is_err());
}

#[test]
fn test_submit_eligibility_requires_every_required_field() {
    let (mut document, mut form, controller) = setup();
    let validator = controller.validator();

    assert!(!form.is_submit_eligible(validator));

    document.set_value("name", "Ada");
    document.set_value("email", "ada@example.com");
    form.sync_all(&document);
    assert!(!form.is_submit_eligible(validator));

    document.set_value("message", "Hello");
    form.sync_all(&document);
    assert!(form.is_submit_eligible(validator));

    document.set_value("phone", "abc");
    form.sync_all(&document);
    assert!(form.is_submit_eligible(validator));
}

#[test]
fn test_payload_uses_names() {
    let (mut document, mut form, _) = setup();
    document.set_value("email", "ada@example.com");
    form.sync_all(&document);

    let payload = form.payload();
    assert_eq!(payload.len(), 4);
    assert_eq!(
        payload[1],
        ("email".to_string(), "ada@example.com".to_string())
    );
}

#[test]
fn test_reset_clears_values_everywhere() {
    let (mut document, mut form, _) = setup();
    document.set_value("name", "Ada");
    form.sync_all(&document);

    form.reset(&mut document);

    assert_eq!(document.get("name").unwrap().value, "");
    assert_eq!(form.field("name").unwrap().value, "");
}

#[test]
fn test_reset_restores_markup_values() {
    let mut document = Document::new(
        Element::html().id("root").child(
            Element::form().id("quoteForm").children([
                Element::input("text").id("company").name("company").value("Acme"),
                Element::select().id("subject").name("subject").value("devis"),
                Element::textarea().id("details").name("details"),
            ]),
        ),
    );
    let mut form = FormState::parse(&document, "quoteForm").unwrap();

    document.set_value("company", "Initech");
    document.set_value("subject", "support");
    document.set_value("details", "Two seats");
    form.sync_all(&document);
    form.field_mut("subject").unwrap().status = FieldStatus::Invalid("bad".to_string());

    form.reset(&mut document);

    assert_eq!(document.get("company").unwrap().value, "Acme");
    assert_eq!(document.get("subject").unwrap().value, "devis");
    assert_eq!(document.get("details").unwrap().value, "");
    assert_eq!(
        form.payload(),
        vec![
            ("company".to_string(), "Acme".to_string()),
            ("subject".to_string(), "devis".to_string()),
            ("details".to_string(), String::new()),
        ]
    );
    assert_eq!(status(&form, "subject"), FieldStatus::Untouched);
}

// ============================================================================
// Blur and input
// ============================================================================

#[test]
fn test_blur_marks_invalid_and_annotates() {
    let (mut document, mut form, controller) = setup();

    let verdict = controller.on_blur(&mut document, &mut form, "name").unwrap();

    assert!(!verdict.is_valid());
    assert!(status(&form, "name").is_invalid());
    assert!(ErrorPresenter::default().has_annotation(&document, "name"));
}

#[test]
fn test_blur_on_valid_value() {
    let (mut document, mut form, controller) = setup();
    document.set_value("email", "ada@example.com");

    controller.on_blur(&mut document, &mut form, "email");

    assert_eq!(status(&form, "email"), FieldStatus::Valid);
    assert!(!ErrorPresenter::default().has_annotation(&document, "email"));
}

#[test]
fn test_input_on_untouched_field_shows_nothing() {
    let (mut document, mut form, controller) = setup();
    document.set_value("email", "ada@");

    let verdict = controller.on_input(&mut document, &mut form, "email");

    assert!(verdict.is_none());
    assert_eq!(status(&form, "email"), FieldStatus::Untouched);
    assert_eq!(form.field("email").unwrap().value, "ada@");
    assert!(!ErrorPresenter::default().has_annotation(&document, "email"));
}

#[test]
fn test_input_rechecks_invalid_field() {
    let (mut document, mut form, controller) = setup();
    document.set_value("email", "ada@");
    controller.on_blur(&mut document, &mut form, "email");
    assert!(status(&form, "email").is_invalid());

    document.set_value("email", "ada@example.com");
    let verdict = controller.on_input(&mut document, &mut form, "email").unwrap();

    assert!(verdict.is_valid());
    assert_eq!(status(&form, "email"), FieldStatus::Valid);
    assert!(!ErrorPresenter::default().has_annotation(&document, "email"));
}

#[test]
fn test_input_does_not_recheck_valid_field() {
    let (mut document, mut form, controller) = setup();
    document.set_value("email", "ada@example.com");
    controller.on_blur(&mut document, &mut form, "email");

    document.set_value("email", "ada@");
    assert!(controller.on_input(&mut document, &mut form, "email").is_none());
    assert_eq!(status(&form, "email"), FieldStatus::Valid);
}

#[test]
fn test_blur_on_unknown_field() {
    let (mut document, mut form, controller) = setup();
    assert!(controller.on_blur(&mut document, &mut form, "submit").is_none());
    assert!(document.with_class("field-error").is_empty());
    assert_eq!(
        ConfigurationError::NotAField("submit".to_string()).to_string(),
        "element 'submit' is not a form field"
    );
}

// ============================================================================
// Submit validation
// ============================================================================

#[test]
fn test_validate_for_submit_reports_every_required_error() {
    let (mut document, mut form, controller) = setup();
    document.set_value("email", "not-an-email");

    let result = controller.validate_for_submit(&mut document, &mut form);

    let ids: Vec<&str> = result.errors().iter().map(|e| e.field_id.as_str()).collect();
    assert_eq!(ids, vec!["name", "email", "message"]);
    assert_eq!(document.with_class("field-error").len(), 3);
}

#[test]
fn test_validate_for_submit_skips_optional_fields() {
    let (mut document, mut form, controller) = setup();
    document.set_value("name", "Ada");
    document.set_value("email", "ada@example.com");
    document.set_value("message", "Hello");
    document.set_value("phone", "abc");

    let result = controller.validate_for_submit(&mut document, &mut form);

    assert!(result.is_valid());
    assert_eq!(status(&form, "phone"), FieldStatus::Untouched);
}

#[test]
fn test_clear_all_removes_every_annotation() {
    let (mut document, mut form, controller) = setup();
    controller.validate_for_submit(&mut document, &mut form);
    assert!(!document.with_class("field-error").is_empty());

    controller.clear_all(&mut document, &mut form);

    assert!(document.with_class("field-error").is_empty());
    assert!(document.with_class("error").is_empty());
    assert!(form.fields().iter().all(|f| !f.status.is_touched()));
}
