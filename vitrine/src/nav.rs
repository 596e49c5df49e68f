//! Navigation: the mobile drawer and in-page anchor scrolling.

use vitrine_dom::{Document, EventResult, ScrollBehavior, Tag};

use crate::config::NavConfig;

// =============================================================================
// MobileMenu
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

impl DrawerState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

/// The burger button and the links drawer it opens on small screens.
#[derive(Debug, Clone)]
pub struct MobileMenu {
    button_id: String,
    links_id: String,
    active_class: String,
    state: DrawerState,
}

impl MobileMenu {
    /// Bind to the burger button and the links container.
    ///
    /// Returns `None`, after logging, when either is missing from the page.
    pub fn bind(document: &Document, config: &NavConfig) -> Option<Self> {
        if !document.exists(&config.menu_button_id) {
            log::warn!(
                "MobileMenu: no '#{}' button, drawer disabled",
                config.menu_button_id
            );
            return None;
        }
        let Some(links_id) = document.first_with_class(&config.links_class) else {
            log::warn!(
                "MobileMenu: no '.{}' container, drawer disabled",
                config.links_class
            );
            return None;
        };

        Some(Self {
            button_id: config.menu_button_id.clone(),
            links_id,
            active_class: config.active_class.clone(),
            state: DrawerState::Closed,
        })
    }

    pub fn state(&self) -> DrawerState {
        self.state
    }

    pub fn toggle(&mut self, document: &mut Document) {
        self.state = match self.state {
            DrawerState::Closed => DrawerState::Open,
            DrawerState::Open => DrawerState::Closed,
        };
        log::debug!("MobileMenu: {:?}", self.state);
        self.render(document);
    }

    pub fn close(&mut self, document: &mut Document) {
        if self.state.is_open() {
            self.state = DrawerState::Closed;
            log::debug!("MobileMenu: Closed");
            self.render(document);
        }
    }

    fn render(&self, document: &mut Document) {
        let open = self.state.is_open();
        for id in [&self.button_id, &self.links_id] {
            if let Some(element) = document.get_mut(id) {
                element.set_class(&self.active_class, open);
            }
        }
    }

    pub fn on_click(&mut self, document: &mut Document, target: Option<&str>) -> EventResult {
        let Some(target) = target else {
            self.close(document);
            return EventResult::Ignored;
        };

        if document.contains(&self.button_id, target) {
            self.toggle(document);
            return EventResult::Consumed;
        }

        let on_link = document.contains(&self.links_id, target)
            && document
                .closest(target, |element| element.tag == Tag::Anchor)
                .is_some();
        if on_link || !document.contains(&self.links_id, target) {
            self.close(document);
        }
        EventResult::Ignored
    }
}

// =============================================================================
// SmoothScroll
// =============================================================================

/// Turns clicks on `#fragment` links into smooth window scrolls.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    header_class: String,
    offset: i32,
}

impl SmoothScroll {
    pub fn new(config: &NavConfig) -> Self {
        Self {
            header_class: config.header_class.clone(),
            offset: config.scroll_offset,
        }
    }

    /// Where the window should scroll to bring `target_id` under the header.
    pub fn destination(&self, document: &Document, target_id: &str) -> Option<i32> {
        let target = document.get(target_id)?;
        let header_height = document
            .first_with_class(&self.header_class)
            .and_then(|id| document.get(&id))
            .map_or(0, |header| header.height);
        Some(target.offset_top - header_height - self.offset)
    }

    /// Handle a click; in-page anchors always prevent the default navigation.
    pub fn on_click(&self, document: &mut Document, target: Option<&str>) -> EventResult {
        let Some(target) = target else {
            return EventResult::Ignored;
        };

        let fragment = document
            .closest(target, |element| element.tag == Tag::Anchor)
            .and_then(|anchor| anchor.get_attr("href"))
            .and_then(|href| href.strip_prefix('#'))
            .map(str::to_string);
        let Some(fragment) = fragment else {
            return EventResult::Ignored;
        };

        if fragment.is_empty() {
            return EventResult::DefaultPrevented;
        }
        match self.destination(document, &fragment) {
            Some(top) => {
                log::debug!("SmoothScroll: '#{fragment}' at {top}");
                document.scroll_to(top, ScrollBehavior::Smooth);
            }
            None => log::debug!("SmoothScroll: no element '#{fragment}'"),
        }
        EventResult::DefaultPrevented
    }
}
