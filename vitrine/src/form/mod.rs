//! The contact form: field validation and the submit lifecycle for one form.
//!
//! # Example
//!
//! ```ignore
//! let form = ContactForm::bind(page.clone(), config, notifier, submitter)?;
//!
//! form.on_blur("email");
//! match form.request_submit() {
//!     SubmitAttempt::Started(ticket) => {
//!         tokio::spawn(async move { form.run(ticket).await });
//!     }
//!     SubmitAttempt::Blocked(result) => log::debug!("{:?}", result.first_error()),
//!     SubmitAttempt::InFlight => {}
//! }
//! ```

mod controller;
mod state;
mod submission;
mod submitter;

pub use controller::FormValidationController;
pub use state::{FormData, FormState};
pub use submission::{
    SubmissionLifecycle, SubmissionOutcome, SubmissionPhase, SubmissionResult, SubmissionTicket,
    find_submit_button,
};
pub use submitter::{SimulatedSubmitter, Submitter};

use std::sync::Arc;

use vitrine_dom::Document;

use crate::config::FormConfig;
use crate::error::ConfigurationError;
use crate::notify::NotificationSink;
use crate::state::Shared;
use crate::validation::{ValidationResult, ValidationVerdict};

/// Result of a submit request.
#[derive(Debug)]
pub enum SubmitAttempt {
    /// A required field is invalid; nothing was sent.
    Blocked(ValidationResult),
    /// A submission is already running; this request was ignored.
    InFlight,
    /// The submission started; run the ticket to completion.
    Started(SubmissionTicket),
}

impl SubmitAttempt {
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started(_))
    }
}

/// One bound form on the page.
///
/// Cheap to clone; clones share the document, the field state and the
/// submission phase.
#[derive(Debug, Clone)]
pub struct ContactForm {
    form_id: String,
    page: Shared<Document>,
    fields: Shared<FormState>,
    controller: Arc<FormValidationController>,
    lifecycle: SubmissionLifecycle,
}

impl ContactForm {
    /// Bind the form named by `config.form_id`.
    pub fn bind(
        page: Shared<Document>,
        config: FormConfig,
        notifier: Arc<dyn NotificationSink>,
        submitter: Arc<dyn Submitter>,
    ) -> Result<Self, ConfigurationError> {
        let form_id = config.form_id.clone();
        let state = page.read(|document| FormState::parse(document, &form_id))?;
        log::debug!(
            "ContactForm: bound '{form_id}' with {} field(s)",
            state.fields().len()
        );

        let config = Arc::new(config);
        Ok(Self {
            controller: Arc::new(FormValidationController::new(&config)),
            lifecycle: SubmissionLifecycle::new(page.clone(), Arc::clone(&config), notifier, submitter),
            fields: Shared::new(state),
            form_id,
            page,
        })
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    /// Snapshot of the field state.
    pub fn state(&self) -> FormState {
        self.fields.get()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.lifecycle.phase()
    }

    pub fn contains(&self, field_id: &str) -> bool {
        self.fields.read(|form| form.contains(field_id))
    }

    /// Whether every required field validates right now. Shows nothing.
    pub fn is_submit_eligible(&self) -> bool {
        self.page.read(|document| {
            self.fields.update(|form| {
                form.sync_all(document);
                form.is_submit_eligible(self.controller.validator())
            })
        })
    }

    pub fn on_blur(&self, field_id: &str) -> Option<ValidationVerdict> {
        self.page.update(|document| {
            self.fields
                .update(|form| self.controller.on_blur(document, form, field_id))
        })
    }

    pub fn on_input(&self, field_id: &str) -> Option<ValidationVerdict> {
        self.page.update(|document| {
            self.fields
                .update(|form| self.controller.on_input(document, form, field_id))
        })
    }

    /// Validate the required fields and, if they pass, start a submission.
    pub fn request_submit(&self) -> SubmitAttempt {
        self.page.update(|document| {
            if !self.lifecycle.phase().is_idle() {
                return SubmitAttempt::InFlight;
            }

            self.fields.update(|form| {
                let result = self.controller.validate_for_submit(document, form);
                if result.is_invalid() {
                    log::debug!(
                        "ContactForm: submit of '{}' blocked at '{}'",
                        self.form_id,
                        result.first_invalid_field().unwrap_or_default()
                    );
                    return SubmitAttempt::Blocked(result);
                }

                form.sync_all(document);
                match self.lifecycle.begin(document, &self.form_id, form.payload()) {
                    Some(ticket) => SubmitAttempt::Started(ticket),
                    None => SubmitAttempt::InFlight,
                }
            })
        })
    }

    /// Carry a started submission through to `Idle`.
    pub async fn run(&self, ticket: SubmissionTicket) -> SubmissionOutcome {
        let result = self.lifecycle.execute(&ticket).await;
        self.lifecycle.complete(ticket, &result, |document| {
            self.fields.update(|form| {
                self.controller.clear_all(document, form);
                form.reset(document);
            })
        })
    }

    /// Request a submission and, if it starts, run it to completion.
    pub async fn submit(&self) -> Result<SubmissionOutcome, SubmitAttempt> {
        match self.request_submit() {
            SubmitAttempt::Started(ticket) => Ok(self.run(ticket).await),
            other => Err(other),
        }
    }
}
