//! Tests for inline error presentation.

use vitrine::config::FormConfig;
use vitrine::error::ConfigurationError;
use vitrine::presenter::{ERROR_FOR_ATTR, ErrorPresenter};
use vitrine::validation::{ErrorDisplay, FieldStatus, ValidationVerdict};
use vitrine_dom::{Document, Element};

fn form_document() -> Document {
    Document::new(
        Element::html().id("root").child(
            Element::form().id("form").children([
                Element::div().id("row-name").children([
                    Element::input("text").id("name").required(),
                    Element::text("hint").id("name-hint"),
                ]),
                Element::input("email").id("email").required(),
            ]),
        ),
    )
}

fn annotations(document: &Document) -> Vec<String> {
    document.with_class("field-error")
}

// ============================================================================
// Presenting
// ============================================================================

#[test]
fn test_invalid_verdict_adds_class_and_annotation() {
    let mut document = form_document();
    let presenter = ErrorPresenter::default();

    presenter
        .present(&mut document, "email", &ValidationVerdict::invalid("Bad email"))
        .unwrap();

    let field = document.get("email").unwrap();
    assert!(field.has_class("error"));

    let annotation = document.get("email-error").unwrap();
    assert_eq!(annotation.text_content(), "Bad email");
    assert_eq!(annotation.get_attr(ERROR_FOR_ATTR), Some("email"));
    assert!(annotation.has_class("field-error"));
    assert_eq!(document.parent_id("email-error"), Some("form".to_string()));
}

#[test]
fn test_annotation_placed_after_field() {
    let mut document = form_document();
    ErrorPresenter::default()
        .present(&mut document, "name", &ValidationVerdict::invalid("Required"))
        .unwrap();

    let row: Vec<String> = document
        .get("row-name")
        .unwrap()
        .content
        .children()
        .iter()
        .map(|child| child.id.clone())
        .collect();
    assert_eq!(row, vec!["name", "name-error", "name-hint"]);
}

#[test]
fn test_annotation_placed_at_end_of_parent() {
    let mut document = form_document();
    let presenter =
        ErrorPresenter::new(&FormConfig::default().error_display(ErrorDisplay::EndOfParent));
    presenter
        .present(&mut document, "name", &ValidationVerdict::invalid("Required"))
        .unwrap();

    let row: Vec<String> = document
        .get("row-name")
        .unwrap()
        .content
        .children()
        .iter()
        .map(|child| child.id.clone())
        .collect();
    assert_eq!(row, vec!["name", "name-hint", "name-error"]);
}

#[test]
fn test_presenting_twice_keeps_one_annotation() {
    let mut document = form_document();
    let presenter = ErrorPresenter::default();
    let verdict = ValidationVerdict::invalid("Required");

    presenter.present(&mut document, "name", &verdict).unwrap();
    presenter.present(&mut document, "name", &verdict).unwrap();

    assert_eq!(annotations(&document), vec!["name-error"]);
}

#[test]
fn test_new_message_replaces_old() {
    let mut document = form_document();
    let presenter = ErrorPresenter::default();

    presenter
        .present(&mut document, "email", &ValidationVerdict::invalid("Required"))
        .unwrap();
    presenter
        .present(&mut document, "email", &ValidationVerdict::invalid("Bad email"))
        .unwrap();

    assert_eq!(annotations(&document).len(), 1);
    assert_eq!(
        document.get("email-error").unwrap().text_content(),
        "Bad email"
    );
}

#[test]
fn test_valid_verdict_clears_error() {
    let mut document = form_document();
    let presenter = ErrorPresenter::default();

    presenter
        .present(&mut document, "email", &ValidationVerdict::invalid("Bad email"))
        .unwrap();
    presenter
        .present(&mut document, "email", &ValidationVerdict::valid())
        .unwrap();

    assert!(!document.get("email").unwrap().has_class("error"));
    assert!(!ErrorPresenter::default().has_annotation(&document, "email"));
}

#[test]
fn test_clear_and_render_untouched() {
    let mut document = form_document();
    let presenter = ErrorPresenter::default();

    presenter
        .render(&mut document, "name", &FieldStatus::Invalid("Required".to_string()))
        .unwrap();
    assert!(ErrorPresenter::default().has_annotation(&document, "name"));

    presenter.clear(&mut document, "name").unwrap();
    assert!(!ErrorPresenter::default().has_annotation(&document, "name"));
    assert!(!document.get("name").unwrap().has_class("error"));
}

#[test]
fn test_missing_field_is_configuration_error() {
    let mut document = form_document();
    let result = ErrorPresenter::default().present(
        &mut document,
        "ghost",
        &ValidationVerdict::invalid("Required"),
    );
    assert_eq!(
        result,
        Err(ConfigurationError::MissingElement("ghost".to_string()))
    );
    assert!(annotations(&document).is_empty());
}

#[test]
fn test_custom_classes() {
    let mut document = form_document();
    let config = FormConfig {
        error_class: "is-invalid".to_string(),
        annotation_class: "invalid-feedback".to_string(),
        ..FormConfig::default()
    };

    ErrorPresenter::new(&config)
        .present(&mut document, "email", &ValidationVerdict::invalid("Bad"))
        .unwrap();

    assert!(document.get("email").unwrap().has_class("is-invalid"));
    assert_eq!(document.with_class("invalid-feedback"), vec!["email-error"]);
}

// ============================================================================
// Author markup
// ============================================================================

fn hinted_document() -> Document {
    Document::new(
        Element::html().id("root").child(
            Element::form().id("form").children([
                Element::input("tel").id("phone"),
                Element::div()
                    .id("phone-error")
                    .class("hint")
                    .child(Element::text("Format: 06 12 34 56 78")),
            ]),
        ),
    )
}

#[test]
fn test_author_element_with_annotation_id_is_kept() {
    let mut document = hinted_document();
    let presenter = ErrorPresenter::default();

    presenter
        .present(&mut document, "phone", &ValidationVerdict::valid())
        .unwrap();

    assert!(document.exists("phone-error"));
    assert!(!presenter.has_annotation(&document, "phone"));
}

#[test]
fn test_annotation_next_to_author_element_with_same_id() {
    let mut document = hinted_document();
    let presenter = ErrorPresenter::default();

    presenter
        .present(&mut document, "phone", &ValidationVerdict::invalid("Bad phone"))
        .unwrap();
    presenter
        .present(&mut document, "phone", &ValidationVerdict::invalid("Bad phone"))
        .unwrap();

    let notes = presenter.annotations_for(&document, "phone");
    assert_eq!(notes.len(), 1);
    assert_ne!(notes[0], "phone-error");
    assert_eq!(document.get(&notes[0]).unwrap().text_content(), "Bad phone");

    presenter.clear(&mut document, "phone").unwrap();
    assert!(presenter.annotations_for(&document, "phone").is_empty());
    assert_eq!(
        document.get("phone-error").unwrap().text_content(),
        "Format: 06 12 34 56 78"
    );
}
