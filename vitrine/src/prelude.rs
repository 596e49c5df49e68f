//! Prelude module for convenient imports.
//!
//! ```ignore
//! use vitrine::prelude::*;
//! ```

// Page
pub use crate::config::{FormConfig, SiteConfig};
pub use crate::error::{ConfigurationError, SiteError, SubmissionError};
pub use crate::site::{Services, Site};
pub use crate::state::Shared;

// Contact form
pub use crate::form::{
    ContactForm, FormData, SimulatedSubmitter, SubmissionOutcome, SubmissionPhase, SubmitAttempt,
    Submitter,
};
pub use crate::validation::{FieldStatus, FieldValidator, ValidationResult, ValidationVerdict};

// Notifications and settings
pub use crate::notify::{LogSink, Notification, NotificationKind, NotificationSink, ToastQueue};
pub use crate::settings::SettingsProvider;
pub use crate::theme::Theme;

// Re-export the document model
pub use vitrine_dom::{Document, Element, Event, EventResult};
