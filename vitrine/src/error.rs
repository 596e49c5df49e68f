//! Error types shared across the behavior layer.

use std::time::Duration;

use thiserror::Error;

use crate::settings::SettingsError;

/// The page markup does not have what a module expects.
///
/// These are logged and the affected feature degrades; they never abort the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("element '{0}' not found")]
    MissingElement(String),

    #[error("form '{form}' has no submit button")]
    MissingSubmitButton { form: String },

    #[error("element '{0}' is not a form field")]
    NotAField(String),
}

/// A submission attempt did not succeed.
///
/// Recoverable: surfaced through the notification sink, field values are kept
/// so the visitor can retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("submission timed out after {}ms", .0.as_millis())]
    TimedOut(Duration),

    #[error("submission rejected: {0}")]
    Rejected(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// The site configuration could not be read.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors surfaced by `Site`.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
