use crate::{AppState, Effect, Msg};

const SCANNING_MESSAGE: &str = "Scanning for images...";
const EMPTY_URL_MESSAGE: &str = "Please enter a URL";
const NO_IMAGES_MESSAGE: &str = "No images found on this page";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlEdited(text) => {
            state.set_url_input(text);
            Vec::new()
        }
        Msg::ScrapeRequested => {
            // In-flight guard: a second request while one is outstanding
            // is rejected rather than run concurrently.
            if state.is_busy() {
                return (state, Vec::new());
            }
            let url = state.url_input().trim().to_string();
            if url.is_empty() {
                state.set_error(EMPTY_URL_MESSAGE);
                return (state, Vec::new());
            }
            let url = ensure_scheme(url);
            state.clear_error();
            state.begin_busy(SCANNING_MESSAGE.to_string());
            vec![Effect::ScrapePage { url }]
        }
        Msg::ScrapeFinished(result) => {
            state.finish_busy();
            match result {
                Ok(scan) if scan.images.is_empty() => {
                    // A successful scan with nothing on it. Prior results
                    // stay intact so the user can recover.
                    state.set_error(NO_IMAGES_MESSAGE);
                    state.hide_results();
                }
                Ok(scan) => state.set_discovery(scan.images, scan.hostname),
                Err(message) => state.set_error(message),
            }
            Vec::new()
        }
        Msg::ImageToggled(locator) => {
            state.toggle(&locator);
            Vec::new()
        }
        Msg::SelectAllToggled => {
            if state.is_all_selected() {
                state.deselect_all();
            } else {
                state.select_all();
            }
            Vec::new()
        }
        Msg::DownloadRequested => {
            if state.is_busy() || state.selection_len() == 0 {
                return (state, Vec::new());
            }
            let images = state.selected_in_discovery_order();
            state.clear_error();
            state.begin_busy(format!("Downloading {} images...", images.len()));
            vec![Effect::PackageImages {
                images,
                hostname: state.archive_token().to_string(),
            }]
        }
        Msg::DownloadFinished(result) => {
            state.finish_busy();
            if let Err(message) = result {
                state.set_error(message);
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Prepend a default secure scheme when the input carries none. Pure string
/// transform, mirroring what a browser address bar would do.
fn ensure_scheme(url: String) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url
    } else {
        format!("https://{url}")
    }
}
