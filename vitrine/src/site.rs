//! Page initialization and event dispatch.
//!
//! [`Site`] owns every behavior module and routes host events to them:
//! 1. Clicks: theme dropdown, mobile drawer, anchor scrolling
//! 2. Blur and input: contact form validation
//! 3. Submit: contact form submission (spawned)
//! 4. Scroll and resize: header state, section reveal

use std::sync::Arc;

use futures::future::join_all;
use tokio::task::JoinHandle;
use vitrine_dom::{Document, Event, EventResult};

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::form::{ContactForm, SimulatedSubmitter, SubmissionOutcome, SubmitAttempt, Submitter};
use crate::nav::{MobileMenu, SmoothScroll};
use crate::notify::{LogSink, NotificationSink};
use crate::scroll::{HeaderScroll, RevealObserver};
use crate::settings::SettingsProvider;
use crate::state::Shared;
use crate::theme::{Theme, ThemeManager};

// =============================================================================
// Services
// =============================================================================

/// Outside collaborators the page talks to.
#[derive(Clone)]
pub struct Services {
    pub notifier: Arc<dyn NotificationSink>,
    pub submitter: Arc<dyn Submitter>,
    pub settings: SettingsProvider,
}

impl Services {
    pub fn new(
        notifier: Arc<dyn NotificationSink>,
        submitter: Arc<dyn Submitter>,
        settings: SettingsProvider,
    ) -> Self {
        Self {
            notifier,
            submitter,
            settings,
        }
    }

    /// Notifications to the log, a simulated backend and in-memory settings.
    pub fn simulated(config: &SiteConfig) -> Self {
        Self::new(
            Arc::new(LogSink),
            Arc::new(SimulatedSubmitter::new(config.form.submit_latency())),
            SettingsProvider::in_memory(),
        )
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Site
// =============================================================================

/// The behavior layer of one page.
#[derive(Debug)]
pub struct Site {
    page: Shared<Document>,
    theme: ThemeManager,
    menu: Option<MobileMenu>,
    smooth_scroll: SmoothScroll,
    header: HeaderScroll,
    reveal: RevealObserver,
    form: Option<ContactForm>,
    in_flight: Vec<JoinHandle<SubmissionOutcome>>,
}

impl Site {
    /// Bind every module to the document and render the initial state.
    ///
    /// Markup that is missing or cannot be bound (drawer, contact form) is
    /// logged and disables the matching feature; the rest of the page still works.
    pub async fn init(
        document: Document,
        config: SiteConfig,
        services: Services,
    ) -> Result<Self, SiteError> {
        let page = Shared::new(document);

        let theme = ThemeManager::load(services.settings.clone(), config.theme.clone()).await;
        let menu = page.read(|document| MobileMenu::bind(document, &config.nav));

        let form = if page.read(|document| document.exists(&config.form.form_id)) {
            match ContactForm::bind(
                page.clone(),
                config.form.clone(),
                services.notifier.clone(),
                services.submitter.clone(),
            ) {
                Ok(form) => Some(form),
                Err(e) => {
                    log::warn!("Site: contact form disabled: {e}");
                    None
                }
            }
        } else {
            log::warn!(
                "Site: no '#{}' form, contact form disabled",
                config.form.form_id
            );
            None
        };

        let site = Self {
            theme,
            menu,
            smooth_scroll: SmoothScroll::new(&config.nav),
            header: HeaderScroll::new(config.header.clone()),
            reveal: RevealObserver::new(config.reveal.clone()),
            form,
            in_flight: Vec::new(),
            page,
        };

        site.page.update(|document| {
            site.theme.apply(document);
            site.reveal.observe(document);
        });
        log::info!("Site: initialized");
        Ok(site)
    }

    /// Like [`Site::init`], with the configuration given as JSON.
    pub async fn from_json(
        document: Document,
        json: &str,
        services: Services,
    ) -> Result<Self, SiteError> {
        let config = SiteConfig::from_json(json)?;
        Self::init(document, config, services).await
    }

    pub fn page(&self) -> &Shared<Document> {
        &self.page
    }

    pub fn form(&self) -> Option<&ContactForm> {
        self.form.as_ref()
    }

    pub fn theme(&self) -> &ThemeManager {
        &self.theme
    }

    pub fn menu(&self) -> Option<&MobileMenu> {
        self.menu.as_ref()
    }

    pub fn header(&self) -> &HeaderScroll {
        &self.header
    }

    /// Number of submissions spawned and not yet settled.
    pub fn pending(&self) -> usize {
        self.in_flight.iter().filter(|task| !task.is_finished()).count()
    }

    /// Switch and persist the theme outside of a click.
    pub async fn set_theme(&mut self, theme: Theme) -> Result<(), SiteError> {
        Ok(self.theme.set_theme(&self.page, theme).await?)
    }

    // -------------------------------------------------------------------------
    // Dispatch
    // -------------------------------------------------------------------------

    pub async fn dispatch(&mut self, event: Event) -> EventResult {
        log::trace!("Site: {event:?}");
        match event {
            Event::Click { target } => self.dispatch_click(target.as_deref()).await,
            Event::Blur { target } => self.dispatch_blur(&target),
            Event::Input { target, value } => self.dispatch_input(&target, value),
            Event::Submit { target } => self.dispatch_submit(&target),
            Event::Scroll { y } => {
                self.page.update(|document| {
                    document.set_scroll_y(y);
                    self.header.on_scroll(document, y);
                    self.reveal.observe(document);
                });
                EventResult::Consumed
            }
            Event::Resize { viewport_height } => {
                self.page.update(|document| {
                    document.set_viewport_height(viewport_height);
                    self.reveal.observe(document);
                });
                EventResult::Consumed
            }
        }
    }

    async fn dispatch_click(&mut self, target: Option<&str>) -> EventResult {
        let mut result = self.theme.on_click(&self.page, target).await;
        if result.is_handled() {
            return result;
        }

        self.page.update(|document| {
            if let Some(menu) = &mut self.menu {
                result = result.merge(menu.on_click(document, target));
            }
            result = result.merge(self.smooth_scroll.on_click(document, target));
        });
        result
    }

    fn dispatch_blur(&self, target: &str) -> EventResult {
        match &self.form {
            Some(form) if form.contains(target) => {
                form.on_blur(target);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn dispatch_input(&self, target: &str, value: String) -> EventResult {
        self.page.update(|document| document.set_value(target, value));
        match &self.form {
            Some(form) if form.contains(target) => {
                form.on_input(target);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn dispatch_submit(&mut self, target: &str) -> EventResult {
        let Some(form) = self.form.as_ref().filter(|form| form.form_id() == target) else {
            return EventResult::Ignored;
        };

        match form.request_submit() {
            SubmitAttempt::Started(ticket) => {
                let form = form.clone();
                let handle = tokio::spawn(async move { form.run(ticket).await });
                self.in_flight.retain(|task| !task.is_finished());
                self.in_flight.push(handle);
            }
            SubmitAttempt::Blocked(_) => {}
            SubmitAttempt::InFlight => log::debug!("Site: submit ignored, already sending"),
        }
        EventResult::DefaultPrevented
    }

    // -------------------------------------------------------------------------
    // Settling
    // -------------------------------------------------------------------------

    /// Wait for every spawned submission to finish.
    ///
    /// Returns the outcomes of the tasks still tracked (finished tasks are
    /// dropped on the next submit); a task that panicked is logged and left out.
    pub async fn settle(&mut self) -> Vec<SubmissionOutcome> {
        let tasks = std::mem::take(&mut self.in_flight);
        join_all(tasks)
            .await
            .into_iter()
            .filter_map(|joined| match joined {
                Ok(outcome) => Some(outcome),
                Err(e) => {
                    log::error!("Site: submission task failed: {e}");
                    None
                }
            })
            .collect()
    }
}
