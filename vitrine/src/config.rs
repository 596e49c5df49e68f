//! Site configuration.
//!
//! Every section has defaults matching the production site, so an empty JSON
//! object (or no configuration at all) yields a working page. Durations are
//! given in milliseconds.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::theme::Theme;
use crate::validation::{ErrorDisplay, Messages};

/// Configuration for the whole behavior layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub form: FormConfig,
    pub theme: ThemeConfig,
    pub nav: NavConfig,
    pub header: HeaderConfig,
    pub reveal: RevealConfig,
}

impl SiteConfig {
    /// Parse a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn form(mut self, form: FormConfig) -> Self {
        self.form = form;
        self
    }

    pub fn theme(mut self, theme: ThemeConfig) -> Self {
        self.theme = theme;
        self
    }
}

// =============================================================================
// Form
// =============================================================================

/// Text of one notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationText {
    pub title: String,
    pub description: String,
    pub duration_ms: u64,
}

impl NotificationText {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Contact form behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Element ID of the form.
    pub form_id: String,
    pub messages: Messages,
    /// Submit button label while a submission is in flight.
    pub sending_label: String,
    /// Class added to the submit button while a submission is in flight.
    pub loading_class: String,
    /// Class marking an invalid field.
    pub error_class: String,
    /// Class of the inline error annotation.
    pub annotation_class: String,
    pub error_display: ErrorDisplay,
    pub success: NotificationText,
    pub failure: NotificationText,
    /// Latency of the simulated submitter.
    pub submit_latency_ms: u64,
    /// Upper bound on a submission before it is treated as failed.
    pub submit_timeout_ms: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: "contactForm".to_string(),
            messages: Messages::default(),
            sending_label: "Envoi en cours...".to_string(),
            loading_class: "loading".to_string(),
            error_class: "error".to_string(),
            annotation_class: "field-error".to_string(),
            error_display: ErrorDisplay::AfterField,
            success: NotificationText {
                title: "Message envoyé avec succès !".to_string(),
                description: "Nous vous répondrons dans les plus brefs délais.".to_string(),
                duration_ms: 4000,
            },
            failure: NotificationText {
                title: "Échec de l'envoi du message".to_string(),
                description: "Veuillez réessayer dans quelques instants.".to_string(),
                duration_ms: 5000,
            },
            submit_latency_ms: 2000,
            submit_timeout_ms: 10_000,
        }
    }
}

impl FormConfig {
    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_millis(self.submit_timeout_ms)
    }

    pub fn form_id(mut self, form_id: impl Into<String>) -> Self {
        self.form_id = form_id.into();
        self
    }

    pub fn error_display(mut self, display: ErrorDisplay) -> Self {
        self.error_display = display;
        self
    }

    pub fn submit_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.submit_timeout_ms = timeout_ms;
        self
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Theme switcher markup and persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Settings key the chosen theme is stored under.
    pub storage_key: String,
    /// Theme used when nothing is stored.
    pub default: Theme,
    pub toggle_id: String,
    pub menu_id: String,
    pub option_class: String,
    pub sun_class: String,
    pub moon_class: String,
    pub active_class: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "theme".to_string(),
            default: Theme::Light,
            toggle_id: "theme-toggle".to_string(),
            menu_id: "theme-menu".to_string(),
            option_class: "theme-option".to_string(),
            sun_class: "sun".to_string(),
            moon_class: "moon".to_string(),
            active_class: "active".to_string(),
        }
    }
}

// =============================================================================
// Navigation
// =============================================================================

/// Mobile drawer and in-page anchor scrolling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub menu_button_id: String,
    pub links_class: String,
    pub active_class: String,
    pub header_class: String,
    /// Extra gap kept between the header and an anchor target.
    pub scroll_offset: i32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            menu_button_id: "mobile-menu".to_string(),
            links_class: "nav-links".to_string(),
            active_class: "active".to_string(),
            header_class: "header".to_string(),
            scroll_offset: 20,
        }
    }
}

// =============================================================================
// Scroll effects
// =============================================================================

/// Header reaction to window scrolling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub header_class: String,
    pub scrolled_class: String,
    pub hidden_class: String,
    /// Offset past which the header is marked as scrolled.
    pub scrolled_after: i32,
    /// Offset past which scrolling down hides the header.
    pub hide_after: i32,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            header_class: "header".to_string(),
            scrolled_class: "scrolled".to_string(),
            hidden_class: "hidden".to_string(),
            scrolled_after: 100,
            hide_after: 200,
        }
    }
}

/// Scroll-triggered reveal of page sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub target_class: String,
    pub visible_class: String,
    /// Fraction of an element that must be on screen.
    pub threshold: f32,
    /// Strip at the bottom of the viewport that does not count as on screen.
    pub bottom_margin: i32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            target_class: "scroll-animate".to_string(),
            visible_class: "visible".to_string(),
            threshold: 0.1,
            bottom_margin: 50,
        }
    }
}
