//! Theme system for the site
//!
//! The visitor picks a light or dark theme from a dropdown. The choice is
//! rendered as a `data-theme` attribute on the root element and persisted
//! through the settings provider, so it survives reloads.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut themes = ThemeManager::load(settings, ThemeConfig::default()).await;
//! page.update(|document| themes.apply(document));
//!
//! // Later, from a click on a theme option:
//! themes.set_theme(&page, Theme::Dark).await?;
//! ```

use serde::{Deserialize, Serialize};
use vitrine_dom::{Document, EventResult};

use crate::config::ThemeConfig;
use crate::settings::{SettingsError, SettingsProvider};
use crate::state::Shared;

/// Attribute on the root element carrying the active theme.
pub const THEME_ATTR: &str = "data-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a theme name as found in `data-theme` attributes.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current theme, theme dropdown state and persistence.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    current: Theme,
    menu_open: bool,
    settings: SettingsProvider,
    config: ThemeConfig,
}

impl ThemeManager {
    /// Create a manager with the configured default theme, without reading storage.
    pub fn new(settings: SettingsProvider, config: ThemeConfig) -> Self {
        Self {
            current: config.default,
            menu_open: false,
            settings,
            config,
        }
    }

    /// Create a manager with the stored theme, falling back to the default.
    ///
    /// A stored value that cannot be read is logged and ignored.
    pub async fn load(settings: SettingsProvider, config: ThemeConfig) -> Self {
        let mut manager = Self::new(settings, config);
        match manager.settings.load::<Theme>(&manager.config.storage_key).await {
            Ok(Some(theme)) => manager.current = theme,
            Ok(None) => {}
            Err(e) => log::warn!("ThemeManager: ignoring stored theme: {e}"),
        }
        log::debug!("ThemeManager: starting with '{}'", manager.current);
        manager
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Render the theme and menu state into the document.
    pub fn apply(&self, document: &mut Document) {
        document
            .root_mut()
            .set_attr(THEME_ATTR, self.current.as_str());

        let light = self.current == Theme::Light;
        for id in document.with_class(&self.config.sun_class) {
            if let Some(icon) = document.get_mut(&id) {
                icon.hidden = !light;
            }
        }
        for id in document.with_class(&self.config.moon_class) {
            if let Some(icon) = document.get_mut(&id) {
                icon.hidden = light;
            }
        }

        if let Some(menu) = document.get_mut(&self.config.menu_id) {
            menu.set_class(&self.config.active_class, self.menu_open);
        }
    }

    /// Switch theme, render it, then persist it.
    ///
    /// The new theme stays applied even if persisting fails.
    pub async fn set_theme(
        &mut self,
        page: &Shared<Document>,
        theme: Theme,
    ) -> Result<(), SettingsError> {
        self.current = theme;
        page.update(|document| self.apply(document));
        log::info!("ThemeManager: theme set to '{theme}'");
        self.settings.save(&self.config.storage_key, &theme).await
    }

    pub fn toggle_menu(&mut self, document: &mut Document) {
        self.menu_open = !self.menu_open;
        self.apply(document);
    }

    pub fn close_menu(&mut self, document: &mut Document) {
        if self.menu_open {
            self.menu_open = false;
            self.apply(document);
        }
    }

    /// Handle a click anywhere on the page.
    ///
    /// Clicks on the toggle or an option are consumed; any other click closes
    /// the menu and is left for other handlers.
    pub async fn on_click(&mut self, page: &Shared<Document>, target: Option<&str>) -> EventResult {
        enum Action {
            Toggle,
            Choose(Option<Theme>),
            Outside,
            Nothing,
        }

        let action = page.read(|document| {
            if !document.exists(&self.config.toggle_id) || !document.exists(&self.config.menu_id) {
                return Action::Nothing;
            }
            let Some(target) = target else {
                return Action::Outside;
            };
            if document.contains(&self.config.toggle_id, target) {
                return Action::Toggle;
            }
            if let Some(option) =
                document.closest(target, |element| element.has_class(&self.config.option_class))
            {
                return Action::Choose(option.get_attr(THEME_ATTR).and_then(Theme::parse));
            }
            if document.contains(&self.config.menu_id, target) {
                return Action::Nothing;
            }
            Action::Outside
        });

        match action {
            Action::Toggle => {
                page.update(|document| self.toggle_menu(document));
                EventResult::Consumed
            }
            Action::Choose(theme) => {
                match theme {
                    Some(theme) => {
                        if let Err(e) = self.set_theme(page, theme).await {
                            log::warn!("ThemeManager: could not persist theme: {e}");
                        }
                    }
                    None => log::warn!("ThemeManager: theme option without a valid {THEME_ATTR}"),
                }
                page.update(|document| self.close_menu(document));
                EventResult::Consumed
            }
            Action::Outside => {
                page.update(|document| self.close_menu(document));
                EventResult::Ignored
            }
            Action::Nothing => EventResult::Ignored,
        }
    }
}
