use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::deliver::DeliverError;

/// Body of `POST /api/scrape`.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeRequest<'a> {
    pub url: &'a str,
}

/// Successful scrape response. The service also reports a `count` field,
/// which is redundant with `images.len()` and ignored here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScrapedPage {
    pub images: Vec<String>,
    #[serde(default)]
    pub hostname: String,
}

/// Body of `POST /api/download`.
#[derive(Debug, Clone, Serialize)]
pub struct PackageRequest<'a> {
    pub images: &'a [String],
    pub hostname: &'a str,
}

/// Non-success error body shared by both endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct ServiceFailure {
    pub error: String,
}

/// Failure of a collaborator call. `Display` renders the exact text shown
/// to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Non-success status; message comes from the `{"error": ...}` body or
    /// the per-operation fallback.
    #[error("{message}")]
    Service { status: u16, message: String },
    /// The request could not complete at all.
    #[error("network error: {0}")]
    Transport(String),
}

/// Failure anywhere along the package-then-deliver path.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("Could not save archive: {0}")]
    Deliver(#[from] DeliverError),
}
