use imgsift_core::{AppViewModel, Msg};

/// What a line of terminal input asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Dispatch(Vec<Msg>),
}

/// Maps a raw input line to a command. Card indices are resolved against
/// the currently rendered view, so only visible locators can be toggled.
pub fn parse_command(line: &str, view: &AppViewModel) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Dispatch(Vec::new());
    }

    match line {
        ":q" | ":quit" => return Command::Quit,
        ":help" | ":h" => return Command::Help,
        ":all" => return Command::Dispatch(vec![Msg::SelectAllToggled]),
        ":dl" | ":download" => return Command::Dispatch(vec![Msg::DownloadRequested]),
        _ => {}
    }

    if let Ok(index) = line.parse::<usize>() {
        return match index.checked_sub(1).and_then(|i| view.cards.get(i)) {
            Some(card) => Command::Dispatch(vec![Msg::ImageToggled(card.locator.clone())]),
            None => Command::Help,
        };
    }

    // Anything else is treated as a URL to scan.
    Command::Dispatch(vec![
        Msg::UrlEdited(line.to_string()),
        Msg::ScrapeRequested,
    ])
}
