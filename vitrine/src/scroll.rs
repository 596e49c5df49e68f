//! Scroll-driven effects: the header's scrolled/hidden states and the
//! one-shot reveal of page sections.

use vitrine_dom::{Document, Element};

use crate::config::{HeaderConfig, RevealConfig};

// =============================================================================
// HeaderScroll
// =============================================================================

/// Header reaction to window scrolling.
#[derive(Debug, Clone)]
pub struct HeaderScroll {
    config: HeaderConfig,
    last_y: i32,
    scrolled: bool,
    hidden: bool,
}

impl HeaderScroll {
    pub fn new(config: HeaderConfig) -> Self {
        Self {
            config,
            last_y: 0,
            scrolled: false,
            hidden: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn last_y(&self) -> i32 {
        self.last_y
    }

    pub fn on_scroll(&mut self, document: &mut Document, y: i32) {
        self.scrolled = y > self.config.scrolled_after;
        self.hidden = y > self.last_y && y > self.config.hide_after;
        self.last_y = y;
        self.render(document);
    }

    fn render(&self, document: &mut Document) {
        let Some(id) = document.first_with_class(&self.config.header_class) else {
            return;
        };
        if let Some(header) = document.get_mut(&id) {
            header.set_class(&self.config.scrolled_class, self.scrolled);
            header.set_class(&self.config.hidden_class, self.hidden);
        }
    }
}

// =============================================================================
// RevealObserver
// =============================================================================

/// Marks sections visible once enough of them has scrolled into view.
#[derive(Debug, Clone)]
pub struct RevealObserver {
    config: RevealConfig,
}

impl RevealObserver {
    pub fn new(config: RevealConfig) -> Self {
        Self { config }
    }

    /// Share of `element` inside the observed band of the viewport, in `0.0..=1.0`.
    pub fn visible_fraction(&self, document: &Document, element: &Element) -> f32 {
        let top = document.scroll_y();
        let bottom = top + document.viewport_height() - self.config.bottom_margin;

        if element.height <= 0 {
            let inside = element.offset_top >= top && element.offset_top <= bottom;
            return if inside { 1.0 } else { 0.0 };
        }

        let start = element.offset_top.max(top);
        let end = (element.offset_top + element.height).min(bottom);
        let overlap = (end - start).max(0);
        overlap as f32 / element.height as f32
    }

    /// Reveal every target that crossed the threshold. Returns the newly revealed IDs.
    pub fn observe(&self, document: &mut Document) -> Vec<String> {
        let revealed: Vec<String> = document
            .with_class(&self.config.target_class)
            .into_iter()
            .filter(|id| {
                document.get(id).is_some_and(|element| {
                    !element.has_class(&self.config.visible_class)
                        && self.visible_fraction(document, element) >= self.config.threshold
                })
            })
            .collect();

        for id in &revealed {
            if let Some(element) = document.get_mut(id) {
                element.add_class(self.config.visible_class.clone());
            }
        }
        if !revealed.is_empty() {
            log::debug!("RevealObserver: revealed {revealed:?}");
        }
        revealed
    }
}
