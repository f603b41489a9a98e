use url::Url;

/// Shown in place of a file name when the locator has no usable path segment.
const FALLBACK_DISPLAY_NAME: &str = "image";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub url_input: String,
    pub cards: Vec<ImageCardView>,
    /// False until the first successful scrape, and again after an
    /// empty-result scrape.
    pub results_visible: bool,
    pub results_count_label: String,
    pub select_all_label: &'static str,
    pub select_all_enabled: bool,
    pub download_enabled: bool,
    pub download_label: String,
    /// Loading overlay message while an operation is outstanding.
    pub loading: Option<String>,
    /// Current error text; empty when no error is active.
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCardView {
    pub locator: String,
    pub file_name: String,
    pub selected: bool,
}

/// Per-entry display name: the last path segment of the locator, or a
/// fallback literal when the locator cannot be parsed or has no segment.
pub fn display_name(locator: &str) -> String {
    let Ok(parsed) = Url::parse(locator) else {
        return FALLBACK_DISPLAY_NAME.to_string();
    };
    parsed
        .path_segments()
        .and_then(|segments| segments.last())
        .filter(|segment| !segment.is_empty())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| FALLBACK_DISPLAY_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::display_name;

    #[test]
    fn last_segment_is_used() {
        assert_eq!(display_name("https://x.example/pics/photo.png"), "photo.png");
    }

    #[test]
    fn trailing_slash_falls_back() {
        assert_eq!(display_name("https://x.example/pics/"), "image");
    }

    #[test]
    fn unparseable_locator_falls_back() {
        assert_eq!(display_name("not a url"), "image");
    }

    #[test]
    fn bare_host_falls_back() {
        assert_eq!(display_name("https://x.example"), "image");
    }
}
