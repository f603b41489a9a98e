/// Result of a successful scrape request, as handed back by the client layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageScan {
    /// Absolute image URLs in the order the service reported them.
    pub images: Vec<String>,
    /// Display hostname of the scraped page; may be empty.
    pub hostname: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    UrlEdited(String),
    /// User submitted the current URL input for scanning.
    ScrapeRequested,
    /// Scrape collaborator finished; Err carries the display message.
    ScrapeFinished(Result<PageScan, String>),
    /// User clicked an image card.
    ImageToggled(String),
    /// User clicked the Select All / Deselect All control.
    SelectAllToggled,
    /// User clicked Download Selected.
    DownloadRequested,
    /// Packaging collaborator finished; Ok carries the delivered file name.
    DownloadFinished(Result<String, String>),
    /// Fallback for placeholder wiring.
    NoOp,
}
