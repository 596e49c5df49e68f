pub mod document;
pub mod element;
pub mod event;

pub use document::{Document, ScrollBehavior, ScrollRequest};
pub use element::{Content, Element, Tag};
pub use event::{Event, EventResult};
