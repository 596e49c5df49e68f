mod page;
mod submitter;

use std::sync::Arc;
use std::time::Duration;

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use vitrine::prelude::*;

use crate::submitter::FlakySubmitter;

fn event_click(target: &str) -> Event {
    Event::Click {
        target: Some(target.to_string()),
    }
}

fn event_input(target: &str, value: &str) -> Event {
    Event::Input {
        target: target.to_string(),
        value: value.to_string(),
    }
}

fn print_toasts(toasts: &ToastQueue) {
    for toast in toasts.take() {
        println!(
            "[{:?}] {} - {} ({}ms)",
            toast.kind,
            toast.title,
            toast.description,
            toast.duration.as_millis()
        );
    }
}

async fn fill_form(site: &mut Site, email: &str) {
    site.dispatch(event_input("name", "Ada Lovelace")).await;
    site.dispatch(event_input("email", email)).await;
    site.dispatch(Event::Blur {
        target: "email".to_string(),
    })
    .await;
    site.dispatch(event_input("message", "Bonjour, j'aimerais un devis."))
        .await;
}

#[tokio::main]
async fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .expect("Failed to initialize logger");

    let config = SiteConfig::default();
    let toasts = ToastQueue::new();
    let services = Services::new(
        Arc::new(toasts.clone()),
        Arc::new(FlakySubmitter::new(Duration::from_millis(300))),
        SettingsProvider::in_memory(),
    );

    let mut site = match Site::init(page::contact_page(), config, services).await {
        Ok(site) => site,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    // Navigation and theme
    site.dispatch(event_click("mobile-menu")).await;
    site.dispatch(event_click("link-contact")).await;
    if let Some(request) = site.page().update(|document| document.take_scroll_request()) {
        println!("scroll to {} ({:?})", request.top, request.behavior);
    }
    site.dispatch(event_click("theme-toggle")).await;
    site.dispatch(event_click("theme-dark")).await;
    println!("theme: {}", site.theme().current());

    site.dispatch(Event::Scroll { y: 1200 }).await;
    println!(
        "header scrolled={} hidden={}",
        site.header().is_scrolled(),
        site.header().is_hidden()
    );

    // A typo in the email blocks the submission
    fill_form(&mut site, "ada@example").await;
    let submit = Event::Submit {
        target: "contactForm".to_string(),
    };
    site.dispatch(submit.clone()).await;
    let annotation = site
        .page()
        .read(|document| document.get("email-error").map(|e| e.text_content()));
    println!("email: {}", annotation.unwrap_or_default());

    // First attempt is dropped by the backend, the retry goes through
    site.dispatch(event_input("email", "ada@example.com")).await;
    for _ in 0..2 {
        site.dispatch(submit.clone()).await;
        site.dispatch(submit.clone()).await;
        let outcomes = site.settle().await;
        println!("outcomes: {outcomes:?}");
        print_toasts(&toasts);
    }
}
