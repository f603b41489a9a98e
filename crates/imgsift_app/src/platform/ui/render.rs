use imgsift_core::AppViewModel;

pub const BANNER: &str = "imgsift — scrape a page, pick images, download them as a zip";

pub const HELP: &str = "\
Commands:
  <url>            scan a page for images
  <number>         toggle selection of that image
  :all             select all / deselect all
  :dl              download the selected images
  :help            show this help
  :quit            exit";

/// Projects the view model into one terminal frame. Pure; the caller
/// decides when to print it.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    out.push('\n');

    if let Some(message) = &view.loading {
        out.push_str(&format!("... {message}\n"));
    }
    if !view.error.is_empty() {
        out.push_str(&format!("!!! {}\n", view.error));
    }

    if view.results_visible {
        out.push_str(&format!("{}\n", view.results_count_label));
        for (index, card) in view.cards.iter().enumerate() {
            let mark = if card.selected { 'x' } else { ' ' };
            out.push_str(&format!(
                "[{:>3}] [{mark}] {}  ({})\n",
                index + 1,
                card.file_name,
                card.locator
            ));
        }
        let select_all = if view.select_all_enabled {
            view.select_all_label.to_string()
        } else {
            format!("{} (no results)", view.select_all_label)
        };
        let download = if view.download_enabled {
            view.download_label.clone()
        } else {
            format!("{} (nothing selected)", view.download_label)
        };
        out.push_str(&format!(":all = {select_all} | :dl = {download}\n"));
    }

    out.push_str("> ");
    out
}
