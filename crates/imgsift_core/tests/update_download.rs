use std::sync::Once;

use imgsift_core::{update, AppState, Effect, Msg, PageScan};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(app_logging::initialize_for_tests);
}

fn with_discovery(images: &[&str], hostname: &str) -> AppState {
    let state = AppState::new();
    let (state, _) = update(state, Msg::UrlEdited(format!("{hostname}.example")));
    let (state, _) = update(state, Msg::ScrapeRequested);
    let (state, _) = update(
        state,
        Msg::ScrapeFinished(Ok(PageScan {
            images: images.iter().map(ToString::to_string).collect(),
            hostname: hostname.to_string(),
        })),
    );
    state
}

#[test]
fn empty_selection_is_a_noop() {
    init_logging();
    let state = with_discovery(&["https://x/a.png"], "x");
    let before = state.clone();

    let (next, effects) = update(state, Msg::DownloadRequested);

    assert!(effects.is_empty());
    assert_eq!(next, before);
}

#[test]
fn download_packages_selection_in_discovery_order() {
    init_logging();
    let state = with_discovery(&["https://x/a.png", "https://x/b.png"], "x");
    let (state, _) = update(state, Msg::ImageToggled("https://x/b.png".to_string()));
    let (state, _) = update(state, Msg::ImageToggled("https://x/a.png".to_string()));

    let (state, effects) = update(state, Msg::DownloadRequested);

    assert_eq!(
        effects,
        vec![Effect::PackageImages {
            images: vec!["https://x/a.png".to_string(), "https://x/b.png".to_string()],
            hostname: "x".to_string(),
        }]
    );
    assert_eq!(
        state.view().loading.as_deref(),
        Some("Downloading 2 images...")
    );
    assert!(!state.view().download_enabled);
}

#[test]
fn single_selection_sends_only_that_locator() {
    init_logging();
    let state = with_discovery(&["https://x/a.png", "https://x/b.png"], "x");
    let (state, _) = update(state, Msg::ImageToggled("https://x/a.png".to_string()));

    let (_state, effects) = update(state, Msg::DownloadRequested);

    assert_eq!(
        effects,
        vec![Effect::PackageImages {
            images: vec!["https://x/a.png".to_string()],
            hostname: "x".to_string(),
        }]
    );
}

#[test]
fn busy_message_captures_count_at_invocation() {
    init_logging();
    let state = with_discovery(&["https://x/a.png"], "x");
    let (state, _) = update(state, Msg::ImageToggled("https://x/a.png".to_string()));

    let (state, _effects) = update(state, Msg::DownloadRequested);

    assert_eq!(
        state.view().loading.as_deref(),
        Some("Downloading 1 images...")
    );
}

#[test]
fn success_returns_to_idle_without_error() {
    init_logging();
    let state = with_discovery(&["https://x/a.png"], "x");
    let (state, _) = update(state, Msg::ImageToggled("https://x/a.png".to_string()));
    let (state, _) = update(state, Msg::DownloadRequested);

    let (state, effects) = update(state, Msg::DownloadFinished(Ok("images_x.zip".to_string())));

    assert!(effects.is_empty());
    let view = state.view();
    assert!(view.loading.is_none());
    assert_eq!(view.error, "");
    assert!(view.download_enabled);
}

#[test]
fn failure_surfaces_message_and_reenables_control() {
    init_logging();
    let state = with_discovery(&["https://x/a.png"], "x");
    let (state, _) = update(state, Msg::ImageToggled("https://x/a.png".to_string()));
    let (state, _) = update(state, Msg::DownloadRequested);

    let (state, effects) = update(state, Msg::DownloadFinished(Err("disk full".to_string())));

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.error, "disk full");
    assert!(view.loading.is_none());
    // Selection is untouched by the failure, so the control comes back.
    assert!(view.download_enabled);
    assert_eq!(state.selection_len(), 1);
}

#[test]
fn second_download_while_busy_is_rejected() {
    init_logging();
    let state = with_discovery(&["https://x/a.png"], "x");
    let (state, _) = update(state, Msg::ImageToggled("https://x/a.png".to_string()));
    let (state, effects) = update(state, Msg::DownloadRequested);
    assert_eq!(effects.len(), 1);

    let before = state.clone();
    let (next, effects) = update(state, Msg::DownloadRequested);

    assert!(effects.is_empty());
    assert_eq!(next, before);
}

#[test]
fn download_blocked_while_scrape_in_flight() {
    init_logging();
    let state = with_discovery(&["https://x/a.png"], "x");
    let (state, _) = update(state, Msg::ImageToggled("https://x/a.png".to_string()));
    // Kick off a re-scrape; the download must not start underneath it.
    let (state, _) = update(state, Msg::ScrapeRequested);

    let (_state, effects) = update(state, Msg::DownloadRequested);

    assert!(effects.is_empty());
}
