use std::collections::HashSet;

use crate::view_model::{display_name, AppViewModel, ImageCardView};

/// Archive token used when the scrape response carries no hostname.
pub const FALLBACK_ARCHIVE_TOKEN: &str = "images";

/// Whether an orchestrated network operation is currently outstanding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OperationState {
    #[default]
    Idle,
    /// The carried string is the user-visible loading message.
    Busy(String),
}

/// Single-session UI state: the discovered image list, the user's
/// selection over it, and the loading/error surface around both.
///
/// Mutators are crate-private; all mutation flows through [`crate::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    url_input: String,
    discovered: Vec<String>,
    selected: HashSet<String>,
    archive_token: String,
    operation: OperationState,
    error: String,
    results_visible: bool,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            url_input: String::new(),
            discovered: Vec::new(),
            selected: HashSet::new(),
            archive_token: FALLBACK_ARCHIVE_TOKEN.to_string(),
            operation: OperationState::Idle,
            error: String::new(),
            results_visible: false,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn archive_token(&self) -> &str {
        &self.archive_token
    }

    pub fn discovery_len(&self) -> usize {
        self.discovered.len()
    }

    pub fn selection_len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.operation, OperationState::Busy(_))
    }

    /// True iff every discovered image is selected and there is at least one.
    /// An empty discovery is never "all selected".
    pub fn is_all_selected(&self) -> bool {
        !self.discovered.is_empty() && self.selected.len() == self.discovered.len()
    }

    /// The current selection projected in discovery order, so the packaging
    /// payload is deterministic regardless of click order.
    pub fn selected_in_discovery_order(&self) -> Vec<String> {
        self.discovered
            .iter()
            .filter(|locator| self.selected.contains(*locator))
            .cloned()
            .collect()
    }

    /// Returns whether any mutation happened since the last call, and
    /// resets the flag. The host renders exactly when this is true.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let cards: Vec<ImageCardView> = self
            .discovered
            .iter()
            .map(|locator| ImageCardView {
                file_name: display_name(locator),
                selected: self.selected.contains(locator),
                locator: locator.clone(),
            })
            .collect();

        let count = self.discovered.len();
        let results_count_label = if count == 1 {
            "1 Image Found".to_string()
        } else {
            format!("{count} Images Found")
        };

        let selected = self.selected.len();
        let download_label = if selected > 0 {
            format!("Download Selected ({selected})")
        } else {
            "Download Selected".to_string()
        };

        AppViewModel {
            url_input: self.url_input.clone(),
            cards,
            results_visible: self.results_visible,
            results_count_label,
            select_all_label: if self.is_all_selected() {
                "Deselect All"
            } else {
                "Select All"
            },
            select_all_enabled: !self.discovered.is_empty(),
            download_enabled: selected > 0 && !self.is_busy(),
            download_label,
            loading: match &self.operation {
                OperationState::Idle => None,
                OperationState::Busy(message) => Some(message.clone()),
            },
            error: self.error.clone(),
        }
    }

    pub(crate) fn set_url_input(&mut self, text: String) {
        if self.url_input != text {
            self.url_input = text;
            self.dirty = true;
        }
    }

    /// Replaces the discovery set wholesale. The selection never survives a
    /// re-scrape, even if locators coincide.
    pub(crate) fn set_discovery(&mut self, locators: Vec<String>, hostname: String) {
        self.discovered = locators;
        self.selected.clear();
        self.archive_token = if hostname.is_empty() {
            FALLBACK_ARCHIVE_TOKEN.to_string()
        } else {
            hostname
        };
        self.results_visible = true;
        self.dirty = true;
    }

    /// Membership toggle over the selection. Locators outside the current
    /// discovery set are ignored; callers only hand in rendered locators,
    /// this is the defensive backstop.
    pub(crate) fn toggle(&mut self, locator: &str) {
        if !self.discovered.iter().any(|known| known == locator) {
            return;
        }
        if !self.selected.remove(locator) {
            self.selected.insert(locator.to_string());
        }
        self.dirty = true;
    }

    pub(crate) fn select_all(&mut self) {
        self.selected = self.discovered.iter().cloned().collect();
        self.dirty = true;
    }

    pub(crate) fn deselect_all(&mut self) {
        self.selected.clear();
        self.dirty = true;
    }

    pub(crate) fn begin_busy(&mut self, message: String) {
        self.operation = OperationState::Busy(message);
        self.dirty = true;
    }

    pub(crate) fn finish_busy(&mut self) {
        self.operation = OperationState::Idle;
        self.dirty = true;
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.error = message.into();
        self.dirty = true;
    }

    pub(crate) fn clear_error(&mut self) {
        if !self.error.is_empty() {
            self.error.clear();
            self.dirty = true;
        }
    }

    pub(crate) fn hide_results(&mut self) {
        if self.results_visible {
            self.results_visible = false;
            self.dirty = true;
        }
    }
}
