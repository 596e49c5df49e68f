use vitrine_dom::{Element, Event, EventResult, Tag};

// ============================================================================
// Classes and attributes
// ============================================================================

#[test]
fn test_add_class_is_idempotent() {
    let mut element = Element::div();
    element.add_class("error");
    element.add_class("error");

    assert_eq!(element.classes, vec!["error"]);
}

#[test]
fn test_toggle_class() {
    let mut element = Element::div().class("active");

    assert!(!element.toggle_class("active"));
    assert!(!element.has_class("active"));
    assert!(element.toggle_class("active"));
    assert!(element.has_class("active"));
}

#[test]
fn test_set_class() {
    let mut element = Element::div();

    element.set_class("scrolled", true);
    assert!(element.has_class("scrolled"));
    element.set_class("scrolled", false);
    assert!(!element.has_class("scrolled"));
}

#[test]
fn test_required_and_input_type() {
    let element = Element::input("EMAIL").required();

    assert!(element.is_required());
    assert_eq!(element.input_type(), Some("email".to_string()));
    assert!(element.is_form_control());
    assert!(!Element::button("Go").is_form_control());
}

#[test]
fn test_attributes() {
    let mut element = Element::anchor("#services");

    assert_eq!(element.get_attr("href"), Some("#services"));
    element.set_attr("data-theme", "dark");
    assert_eq!(element.get_attr("data-theme"), Some("dark"));
    assert_eq!(element.remove_attr("data-theme"), Some("dark".to_string()));
    assert!(!element.has_attr("data-theme"));
}

// ============================================================================
// Content
// ============================================================================

#[test]
fn test_text_content_concatenates_descendants() {
    let element = Element::div()
        .child(Element::text("Hello, "))
        .child(Element::div().child(Element::text("world")));

    assert_eq!(element.text_content(), "Hello, world");
}

#[test]
fn test_set_text_replaces_children() {
    let mut button = Element::button("Envoyer");
    assert_eq!(button.tag, Tag::Button);
    assert_eq!(button.text_content(), "Envoyer");

    button.set_text("Envoi en cours...");
    assert_eq!(button.text_content(), "Envoi en cours...");
}

#[test]
fn test_generated_ids_are_unique() {
    let a = Element::div();
    let b = Element::div();

    assert_ne!(a.id, b.id);
    assert!(a.id.starts_with("div-"));
}

// ============================================================================
// Events
// ============================================================================

#[test]
fn test_event_target() {
    assert_eq!(Event::Blur { target: "a".into() }.target(), Some("a"));
    assert_eq!(Event::Click { target: None }.target(), None);
    assert_eq!(Event::Scroll { y: 10 }.target(), None);
}

#[test]
fn test_event_result_merge_keeps_strongest() {
    assert_eq!(
        EventResult::Ignored.merge(EventResult::Consumed),
        EventResult::Consumed
    );
    assert_eq!(
        EventResult::DefaultPrevented.merge(EventResult::Consumed),
        EventResult::DefaultPrevented
    );
    assert!(!EventResult::Ignored.is_handled());
}
