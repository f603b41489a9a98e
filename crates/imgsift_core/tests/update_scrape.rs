use std::sync::Once;

use imgsift_core::{update, AppState, Effect, Msg, PageScan};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

fn request_scrape(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::UrlEdited(input.to_string()));
    update(state, Msg::ScrapeRequested)
}

fn scan(images: &[&str], hostname: &str) -> PageScan {
    PageScan {
        images: images.iter().map(ToString::to_string).collect(),
        hostname: hostname.to_string(),
    }
}

#[test]
fn empty_url_sets_error_without_network() {
    init_logging();
    let state = AppState::new();

    let (next, effects) = request_scrape(state, "   ");

    assert!(effects.is_empty());
    assert_eq!(next.view().error, "Please enter a URL");
    assert!(next.view().loading.is_none());
}

#[test]
fn missing_scheme_is_prepended() {
    init_logging();
    let state = AppState::new();

    let (next, effects) = request_scrape(state, "example.com");

    assert_eq!(
        effects,
        vec![Effect::ScrapePage {
            url: "https://example.com".to_string(),
        }]
    );
    assert_eq!(next.view().loading.as_deref(), Some("Scanning for images..."));
}

#[test]
fn explicit_scheme_is_kept() {
    init_logging();
    let state = AppState::new();

    let (_next, effects) = request_scrape(state, "  http://example.com  ");

    assert_eq!(
        effects,
        vec![Effect::ScrapePage {
            url: "http://example.com".to_string(),
        }]
    );
}

#[test]
fn request_clears_previous_error() {
    init_logging();
    let state = AppState::new();
    let (state, _) = request_scrape(state, "");
    assert_eq!(state.view().error, "Please enter a URL");

    let (next, _effects) = request_scrape(state, "example.com");

    assert_eq!(next.view().error, "");
}

#[test]
fn successful_scan_replaces_discovery_and_clears_selection() {
    init_logging();
    let state = AppState::new();
    let (state, _) = request_scrape(state, "x.example");
    let (state, _) = update(
        state,
        Msg::ScrapeFinished(Ok(scan(&["https://x/a.png", "https://x/b.png"], "x"))),
    );
    let (state, _) = update(state, Msg::ImageToggled("https://x/a.png".to_string()));
    assert_eq!(state.selection_len(), 1);

    // Re-scrape: selection never survives, even with coinciding locators.
    let (state, _) = request_scrape(state, "x.example");
    let (state, _) = update(
        state,
        Msg::ScrapeFinished(Ok(scan(&["https://x/a.png", "https://x/b.png"], "x"))),
    );

    let view = state.view();
    assert_eq!(state.discovery_len(), 2);
    assert_eq!(state.selection_len(), 0);
    assert_eq!(state.archive_token(), "x");
    assert!(view.results_visible);
    assert_eq!(view.results_count_label, "2 Images Found");
    assert!(view.loading.is_none());
}

#[test]
fn empty_scan_reports_and_keeps_prior_discovery() {
    init_logging();
    let state = AppState::new();
    let (state, _) = request_scrape(state, "x.example");
    let (state, _) = update(
        state,
        Msg::ScrapeFinished(Ok(scan(&["https://x/a.png"], "x"))),
    );
    assert_eq!(state.discovery_len(), 1);

    let (state, _) = request_scrape(state, "empty.example");
    let (state, _) = update(state, Msg::ScrapeFinished(Ok(scan(&[], "empty"))));

    let view = state.view();
    assert_eq!(view.error, "No images found on this page");
    assert!(!view.results_visible);
    // Discovery and naming are untouched by the empty result.
    assert_eq!(state.discovery_len(), 1);
    assert_eq!(state.archive_token(), "x");
    assert!(view.loading.is_none());
}

#[test]
fn failed_scan_surfaces_message_and_keeps_prior_discovery() {
    init_logging();
    let state = AppState::new();
    let (state, _) = request_scrape(state, "x.example");
    let (state, _) = update(
        state,
        Msg::ScrapeFinished(Ok(scan(&["https://x/a.png"], "x"))),
    );

    let (state, _) = request_scrape(state, "down.example");
    let (state, _) = update(
        state,
        Msg::ScrapeFinished(Err("Failed to scrape images".to_string())),
    );

    let view = state.view();
    assert_eq!(view.error, "Failed to scrape images");
    assert_eq!(state.discovery_len(), 1);
    assert!(view.results_visible);
    assert!(view.loading.is_none());
}

#[test]
fn empty_hostname_falls_back_to_default_token() {
    init_logging();
    let state = AppState::new();
    let (state, _) = request_scrape(state, "x.example");
    let (state, _) = update(
        state,
        Msg::ScrapeFinished(Ok(scan(&["https://x/a.png"], ""))),
    );

    assert_eq!(state.archive_token(), "images");
}

#[test]
fn second_request_while_busy_is_rejected() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = request_scrape(state, "x.example");
    assert_eq!(effects.len(), 1);

    let before = state.clone();
    let (next, effects) = update(state, Msg::ScrapeRequested);

    assert!(effects.is_empty());
    assert_eq!(next, before);
}
