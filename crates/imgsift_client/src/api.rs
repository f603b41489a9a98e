use std::time::Duration;

use bytes::Bytes;

use crate::types::{ClientError, PackageRequest, ScrapeRequest, ScrapedPage, ServiceFailure};

const SCRAPE_FALLBACK: &str = "Failed to scrape images";
const DOWNLOAD_FALLBACK: &str = "Failed to download images";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Base URL of the scraping/packaging service, without trailing slash.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ClientSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(10),
            // Packaging fetches every selected image server-side before
            // responding.
            request_timeout: Duration::from_secs(120),
        }
    }
}

/// Scraping collaborator: one URL in, discovered image locators out.
#[async_trait::async_trait]
pub trait ScrapeService: Send + Sync {
    async fn scrape(&self, url: &str) -> Result<ScrapedPage, ClientError>;
}

/// Packaging collaborator: selected locators in, archive payload out.
#[async_trait::async_trait]
pub trait PackagingService: Send + Sync {
    async fn package(&self, images: &[String], hostname: &str) -> Result<Bytes, ClientError>;
}

#[derive(Debug, Clone)]
pub struct HttpServiceClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl HttpServiceClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ClientError::Transport(err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.settings.base_url.trim_end_matches('/'))
    }

    /// Extracts the service error message from a non-success response,
    /// falling back to `fallback` when the body is absent or unparseable.
    async fn failure_from(response: reqwest::Response, fallback: &str) -> ClientError {
        let status = response.status().as_u16();
        let message = match response.bytes().await {
            Ok(body) => serde_json::from_slice::<ServiceFailure>(&body)
                .map(|failure| failure.error)
                .unwrap_or_else(|_| fallback.to_string()),
            Err(_) => fallback.to_string(),
        };
        ClientError::Service { status, message }
    }
}

#[async_trait::async_trait]
impl ScrapeService for HttpServiceClient {
    async fn scrape(&self, url: &str) -> Result<ScrapedPage, ClientError> {
        let response = self
            .client
            .post(self.endpoint("/api/scrape"))
            .json(&ScrapeRequest { url })
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            return Err(Self::failure_from(response, SCRAPE_FALLBACK).await);
        }

        response
            .json::<ScrapedPage>()
            .await
            .map_err(map_transport_error)
    }
}

#[async_trait::async_trait]
impl PackagingService for HttpServiceClient {
    async fn package(&self, images: &[String], hostname: &str) -> Result<Bytes, ClientError> {
        let response = self
            .client
            .post(self.endpoint("/api/download"))
            .json(&PackageRequest { images, hostname })
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            return Err(Self::failure_from(response, DOWNLOAD_FALLBACK).await);
        }

        response.bytes().await.map_err(map_transport_error)
    }
}

fn map_transport_error(err: reqwest::Error) -> ClientError {
    ClientError::Transport(err.to_string())
}
