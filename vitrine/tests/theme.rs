//! Tests for the theme switcher.

use vitrine::config::ThemeConfig;
use vitrine::settings::{MemoryBackend, SettingsProvider};
use vitrine::state::Shared;
use vitrine::theme::{THEME_ATTR, Theme, ThemeManager};
use vitrine_dom::{Document, Element, EventResult};

fn themed_document() -> Document {
    Document::new(
        Element::html().id("root").child(
            Element::header().id("header").children([
                Element::button("")
                    .id("theme-toggle")
                    .children([
                        Element::text("sun").id("sun").class("sun"),
                        Element::text("moon").id("moon").class("moon"),
                    ]),
                Element::div().id("theme-menu").children([
                    Element::div()
                        .id("opt-light")
                        .class("theme-option")
                        .attr("data-theme", "light")
                        .child(Element::text("Light").id("opt-light-label")),
                    Element::div()
                        .id("opt-dark")
                        .class("theme-option")
                        .attr("data-theme", "dark"),
                    Element::div()
                        .id("opt-broken")
                        .class("theme-option")
                        .attr("data-theme", "sepia"),
                ]),
                Element::div().id("elsewhere"),
            ]),
        ),
    )
}

fn root_theme(page: &Shared<Document>) -> Option<String> {
    page.read(|document| document.root().get_attr(THEME_ATTR).map(str::to_string))
}

fn menu_open(page: &Shared<Document>) -> bool {
    page.read(|document| document.get("theme-menu").unwrap().has_class("active"))
}

// ============================================================================
// Theme
// ============================================================================

#[test]
fn test_theme_names() {
    assert_eq!(Theme::default(), Theme::Light);
    assert_eq!(Theme::parse("Dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("sepia"), None);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.to_string(), "dark");
}

// ============================================================================
// Loading and applying
// ============================================================================

#[tokio::test]
async fn test_load_defaults_without_stored_theme() {
    let themes = ThemeManager::load(SettingsProvider::in_memory(), ThemeConfig::default()).await;
    assert_eq!(themes.current(), Theme::Light);
    assert!(!themes.is_menu_open());
}

#[tokio::test]
async fn test_load_restores_stored_theme() {
    let settings = SettingsProvider::in_memory();
    settings.save("theme", &Theme::Dark).await.unwrap();

    let themes = ThemeManager::load(settings, ThemeConfig::default()).await;
    assert_eq!(themes.current(), Theme::Dark);
}

#[tokio::test]
async fn test_load_ignores_unreadable_theme() {
    let settings = SettingsProvider::in_memory();
    settings.save("theme", &42u64).await.unwrap();

    let themes = ThemeManager::load(settings, ThemeConfig::default()).await;
    assert_eq!(themes.current(), Theme::Light);
}

#[tokio::test]
async fn test_apply_sets_attribute_and_icons() {
    let settings = SettingsProvider::in_memory();
    settings.save("theme", &Theme::Dark).await.unwrap();
    let themes = ThemeManager::load(settings, ThemeConfig::default()).await;
    let mut document = themed_document();

    themes.apply(&mut document);

    assert_eq!(document.root().get_attr(THEME_ATTR), Some("dark"));
    assert!(document.get("sun").unwrap().hidden);
    assert!(!document.get("moon").unwrap().hidden);
}

#[tokio::test]
async fn test_set_theme_persists_across_load() {
    let backend = MemoryBackend::new();
    let page = Shared::new(themed_document());
    let mut themes =
        ThemeManager::load(SettingsProvider::new(backend.clone()), ThemeConfig::default()).await;

    themes.set_theme(&page, Theme::Dark).await.unwrap();
    assert_eq!(root_theme(&page), Some("dark".to_string()));
    assert_eq!(backend.len(), 1);

    let reloaded = ThemeManager::load(SettingsProvider::new(backend), ThemeConfig::default()).await;
    assert_eq!(reloaded.current(), Theme::Dark);
}

// ============================================================================
// Dropdown
// ============================================================================

#[tokio::test]
async fn test_toggle_click_opens_and_closes_menu() {
    let page = Shared::new(themed_document());
    let mut themes = ThemeManager::new(SettingsProvider::in_memory(), ThemeConfig::default());

    let result = themes.on_click(&page, Some("sun")).await;
    assert_eq!(result, EventResult::Consumed);
    assert!(menu_open(&page));

    themes.on_click(&page, Some("theme-toggle")).await;
    assert!(!menu_open(&page));
}

#[tokio::test]
async fn test_option_click_sets_theme_and_closes() {
    let page = Shared::new(themed_document());
    let mut themes = ThemeManager::new(SettingsProvider::in_memory(), ThemeConfig::default());
    themes.on_click(&page, Some("theme-toggle")).await;

    let result = themes.on_click(&page, Some("opt-dark")).await;

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(themes.current(), Theme::Dark);
    assert_eq!(root_theme(&page), Some("dark".to_string()));
    assert!(!menu_open(&page));

    themes.on_click(&page, Some("opt-light-label")).await;
    assert_eq!(themes.current(), Theme::Light);
}

#[tokio::test]
async fn test_option_with_unknown_theme_keeps_current() {
    let page = Shared::new(themed_document());
    let mut themes = ThemeManager::new(SettingsProvider::in_memory(), ThemeConfig::default());

    themes.on_click(&page, Some("opt-broken")).await;
    assert_eq!(themes.current(), Theme::Light);
}

#[tokio::test]
async fn test_outside_click_closes_menu() {
    let page = Shared::new(themed_document());
    let mut themes = ThemeManager::new(SettingsProvider::in_memory(), ThemeConfig::default());
    themes.on_click(&page, Some("theme-toggle")).await;

    let result = themes.on_click(&page, Some("elsewhere")).await;
    assert_eq!(result, EventResult::Ignored);
    assert!(!menu_open(&page));

    themes.on_click(&page, Some("theme-toggle")).await;
    themes.on_click(&page, None).await;
    assert!(!themes.is_menu_open());
}

#[tokio::test]
async fn test_clicks_ignored_without_markup() {
    let page = Shared::new(Document::new(Element::html().id("root")));
    let mut themes = ThemeManager::new(SettingsProvider::in_memory(), ThemeConfig::default());

    assert_eq!(themes.on_click(&page, Some("root")).await, EventResult::Ignored);
    assert!(!themes.is_menu_open());
}
