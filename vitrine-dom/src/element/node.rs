use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Element tag names the behavior layer cares about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tag {
    Html,
    Body,
    Header,
    Nav,
    Section,
    #[default]
    Div,
    Span,
    Anchor,
    Button,
    Form,
    Input,
    Textarea,
    Select,
}

impl Tag {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Body => "body",
            Self::Header => "header",
            Self::Nav => "nav",
            Self::Section => "section",
            Self::Div => "div",
            Self::Span => "span",
            Self::Anchor => "a",
            Self::Button => "button",
            Self::Form => "form",
            Self::Input => "input",
            Self::Textarea => "textarea",
            Self::Select => "select",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,

    // Markup
    pub classes: Vec<String>,
    pub attributes: HashMap<String, String>,
    pub content: Content,

    // Form control state
    /// Current value of an input, textarea or select.
    pub value: String,
    pub disabled: bool,
    pub hidden: bool,

    // Layout metrics (document coordinates, supplied by the host)
    pub offset_top: i32,
    pub height: i32,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Div,
            classes: Vec::new(),
            attributes: HashMap::new(),
            content: Content::None,
            value: String::new(),
            disabled: false,
            hidden: false,
            offset_top: 0,
            height: 0,
        }
    }
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            id: generate_id(tag.name()),
            tag,
            ..Default::default()
        }
    }

    pub fn html() -> Self {
        Self::new(Tag::Html)
    }

    pub fn body() -> Self {
        Self::new(Tag::Body)
    }

    pub fn header() -> Self {
        Self::new(Tag::Header)
    }

    pub fn nav() -> Self {
        Self::new(Tag::Nav)
    }

    pub fn section() -> Self {
        Self::new(Tag::Section)
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn form() -> Self {
        Self::new(Tag::Form)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::new(Tag::Span)
        }
    }

    /// Create an `<input>` with the given `type` attribute.
    pub fn input(input_type: impl Into<String>) -> Self {
        Self::new(Tag::Input).attr("type", input_type)
    }

    pub fn textarea() -> Self {
        Self::new(Tag::Textarea)
    }

    pub fn select() -> Self {
        Self::new(Tag::Select)
    }

    /// Create a `<button>` with a text label.
    pub fn button(label: impl Into<String>) -> Self {
        Self {
            content: Content::Text(label.into()),
            ..Self::new(Tag::Button)
        }
    }

    pub fn anchor(href: impl Into<String>) -> Self {
        Self::new(Tag::Anchor).attr("href", href)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Markup
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Mark a form control as `required`.
    pub fn required(self) -> Self {
        self.attr("required", "")
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.attr("name", name)
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.content.children_mut().push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.content.children_mut().extend(children);
        self
    }

    // Layout
    pub fn layout(mut self, offset_top: i32, height: i32) -> Self {
        self.offset_top = offset_top;
        self.height = height;
        self
    }

    // ------------------------------------------------------------------------
    // Classes
    // ------------------------------------------------------------------------

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. Adding a class that is already present is a no-op.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Set or clear a class depending on `on`.
    pub fn set_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Flip a class and return whether it is now present.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        let on = !self.has_class(class);
        self.set_class(class, on);
        on
    }

    // ------------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------------

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    pub fn is_required(&self) -> bool {
        self.has_attr("required")
    }

    /// The `type` attribute of an input or button, lowercased.
    pub fn input_type(&self) -> Option<String> {
        self.get_attr("type").map(str::to_ascii_lowercase)
    }

    /// Whether this element is an input, textarea or select.
    pub fn is_form_control(&self) -> bool {
        matches!(self.tag, Tag::Input | Tag::Textarea | Tag::Select)
    }

    // ------------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------------

    /// Text content of this element and its descendants, concatenated.
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(text) => text.clone(),
            Content::Children(children) => children.iter().map(Element::text_content).collect(),
        }
    }

    /// Replace all content with a single text node.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }
}
