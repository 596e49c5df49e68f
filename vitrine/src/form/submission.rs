//! Submit button state machine.
//!
//! `Idle -> Submitting -> Succeeded | Failed -> Idle`. The disabled submit
//! button, together with the phase, guards against double submission: it is
//! set before the asynchronous call starts and restored on every exit path,
//! including a ticket that is dropped without being completed.

use std::sync::Arc;

use uuid::Uuid;
use vitrine_dom::{Document, Tag};

use super::FormData;
use super::submitter::Submitter;
use crate::config::FormConfig;
use crate::error::{ConfigurationError, SubmissionError};
use crate::notify::{Notification, NotificationKind, NotificationSink};
use crate::state::Shared;

/// Lifecycle stage of the submit action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    /// Completed successfully; notification and reset in progress.
    Succeeded,
    /// Completed with a failure; notification and restore in progress.
    Failed,
}

impl SubmissionPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure,
}

/// What a submission resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub outcome: SubmissionOutcome,
    pub detail: String,
}

impl SubmissionResult {
    pub fn success(detail: impl Into<String>) -> Self {
        Self {
            outcome: SubmissionOutcome::Success,
            detail: detail.into(),
        }
    }

    pub fn failure(detail: impl Into<String>) -> Self {
        Self {
            outcome: SubmissionOutcome::Failure,
            detail: detail.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == SubmissionOutcome::Success
    }
}

/// The submit button as it was before the submission took it over.
#[derive(Debug, Clone)]
struct Affordance {
    button_id: String,
    original_label: String,
}

/// One in-flight submission.
///
/// Dropping a ticket that was never completed (the task was cancelled or
/// panicked) puts the button back and returns the phase to `Idle`.
#[derive(Debug)]
pub struct SubmissionTicket {
    id: Uuid,
    payload: FormData,
    affordance: Option<Affordance>,
    loading_class: String,
    page: Shared<Document>,
    phase: Shared<SubmissionPhase>,
    armed: bool,
}

impl SubmissionTicket {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn payload(&self) -> &FormData {
        &self.payload
    }

    /// Element ID of the submit button this ticket took over, if the form has one.
    pub fn button_id(&self) -> Option<&str> {
        self.affordance.as_ref().map(|a| a.button_id.as_str())
    }

    fn restore(&self, document: &mut Document) {
        let Some(affordance) = &self.affordance else {
            return;
        };
        if let Some(button) = document.get_mut(&affordance.button_id) {
            button.set_text(affordance.original_label.clone());
            button.disabled = false;
            button.remove_class(&self.loading_class);
        }
    }

    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for SubmissionTicket {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        log::warn!("Submission {}: dropped before completion, restoring form", self.id);
        self.page.update(|document| self.restore(document));
        self.phase.set(SubmissionPhase::Idle);
    }
}

/// Find the submit button of a form (`<button>` without a type, or `type="submit"`).
pub fn find_submit_button(document: &Document, form_id: &str) -> Option<String> {
    document
        .select(form_id, |element| {
            element.tag == Tag::Button && element.input_type().is_none_or(|t| t == "submit")
        })
        .into_iter()
        .next()
}

/// Drives the submit button, the submitter and the notification sink.
#[derive(Clone)]
pub struct SubmissionLifecycle {
    page: Shared<Document>,
    phase: Shared<SubmissionPhase>,
    config: Arc<FormConfig>,
    notifier: Arc<dyn NotificationSink>,
    submitter: Arc<dyn Submitter>,
}

impl std::fmt::Debug for SubmissionLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionLifecycle")
            .field("phase", &self.phase.get())
            .finish_non_exhaustive()
    }
}

impl SubmissionLifecycle {
    pub fn new(
        page: Shared<Document>,
        config: Arc<FormConfig>,
        notifier: Arc<dyn NotificationSink>,
        submitter: Arc<dyn Submitter>,
    ) -> Self {
        Self {
            page,
            phase: Shared::new(SubmissionPhase::Idle),
            config,
            notifier,
            submitter,
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase.get()
    }

    /// Take over the submit button and enter `Submitting`.
    ///
    /// Called with the document already locked by the caller. Returns `None`
    /// while another submission is in flight (button disabled or phase not idle).
    pub fn begin(
        &self,
        document: &mut Document,
        form_id: &str,
        payload: FormData,
    ) -> Option<SubmissionTicket> {
        let button_id = find_submit_button(document, form_id);

        let button_busy = button_id
            .as_deref()
            .and_then(|id| document.get(id))
            .is_some_and(|button| button.disabled);
        if button_busy {
            log::debug!("SubmissionLifecycle: submit button of '{form_id}' is disabled");
            return None;
        }

        let started = self.phase.update(|phase| {
            if !phase.is_idle() {
                return false;
            }
            *phase = SubmissionPhase::Submitting;
            true
        });
        if !started {
            log::debug!("SubmissionLifecycle: '{form_id}' already submitting");
            return None;
        }

        let button = match &button_id {
            Some(id) => document.get_mut(id),
            None => None,
        };
        let affordance = match button {
            Some(button) => {
                let original_label = button.text_content();
                button.disabled = true;
                button.set_text(self.config.sending_label.clone());
                button.add_class(self.config.loading_class.clone());
                Some(Affordance {
                    button_id: button.id.clone(),
                    original_label,
                })
            }
            None => {
                log::warn!(
                    "SubmissionLifecycle: {}",
                    ConfigurationError::MissingSubmitButton {
                        form: form_id.to_string()
                    }
                );
                None
            }
        };

        let ticket = SubmissionTicket {
            id: Uuid::new_v4(),
            payload,
            affordance,
            loading_class: self.config.loading_class.clone(),
            page: self.page.clone(),
            phase: self.phase.clone(),
            armed: true,
        };
        log::info!("Submission {}: started for '{form_id}'", ticket.id);
        Some(ticket)
    }

    /// Run the submitter, bounded by the configured timeout.
    pub async fn execute(&self, ticket: &SubmissionTicket) -> SubmissionResult {
        let timeout = self.config.submit_timeout();
        let call = self.submitter.submit(ticket.payload.clone());

        match tokio::time::timeout(timeout, call).await {
            Ok(Ok(detail)) => SubmissionResult::success(detail),
            Ok(Err(e)) => SubmissionResult::failure(e.to_string()),
            Err(_) => SubmissionResult::failure(SubmissionError::TimedOut(timeout).to_string()),
        }
    }

    /// Resolve a submission: notify, reset on success, restore the button, back to `Idle`.
    ///
    /// `reset` runs under the document lock, only on success.
    pub fn complete(
        &self,
        mut ticket: SubmissionTicket,
        result: &SubmissionResult,
        reset: impl FnOnce(&mut Document),
    ) -> SubmissionOutcome {
        let (phase, kind, text) = match result.outcome {
            SubmissionOutcome::Success => (
                SubmissionPhase::Succeeded,
                NotificationKind::Success,
                &self.config.success,
            ),
            SubmissionOutcome::Failure => (
                SubmissionPhase::Failed,
                NotificationKind::Failure,
                &self.config.failure,
            ),
        };

        self.phase.set(phase);
        match result.outcome {
            SubmissionOutcome::Success => {
                log::info!("Submission {}: succeeded ({})", ticket.id, result.detail)
            }
            SubmissionOutcome::Failure => {
                log::warn!("Submission {}: failed ({})", ticket.id, result.detail)
            }
        }

        self.notifier.notify(Notification::from_text(kind, text));

        let success = result.is_success();
        self.page.update(|document| {
            if success {
                reset(document);
            }
            ticket.restore(document);
        });
        ticket.disarm();

        self.phase.set(SubmissionPhase::Idle);
        result.outcome
    }
}
