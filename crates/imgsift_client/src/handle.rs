use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use app_logging::{app_error, app_info};

use crate::api::{ClientSettings, HttpServiceClient, PackagingService, ScrapeService};
use crate::deliver::{ArchiveDelivery, DeliveredArchive};
use crate::types::{ClientError, DownloadError, ScrapedPage};

enum Command {
    Scrape {
        url: String,
    },
    Package {
        images: Vec<String>,
        hostname: String,
    },
}

/// Completion of a command, reported back to the app thread.
#[derive(Debug)]
pub enum ClientEvent {
    ScrapeCompleted {
        result: Result<ScrapedPage, ClientError>,
    },
    DownloadCompleted {
        result: Result<DeliveredArchive, DownloadError>,
    },
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub settings: ClientSettings,
    /// Directory archives are delivered into.
    pub output_dir: PathBuf,
}

/// Runs collaborator calls on a dedicated thread with its own tokio
/// runtime; commands go in over a channel, completions come back as
/// [`ClientEvent`]s on the channel supplied at spawn time.
pub struct ServiceHandle {
    cmd_tx: mpsc::Sender<Command>,
}

impl ServiceHandle {
    pub fn spawn(
        config: ClientConfig,
        event_tx: mpsc::Sender<ClientEvent>,
    ) -> Result<Self, ClientError> {
        let client = Arc::new(HttpServiceClient::new(config.settings)?);
        let delivery = Arc::new(ArchiveDelivery::new(config.output_dir));
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    app_error!("Could not start client runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let delivery = delivery.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), delivery.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx })
    }

    pub fn scrape(&self, url: impl Into<String>) {
        let _ = self.cmd_tx.send(Command::Scrape { url: url.into() });
    }

    pub fn package(&self, images: Vec<String>, hostname: impl Into<String>) {
        let _ = self.cmd_tx.send(Command::Package {
            images,
            hostname: hostname.into(),
        });
    }
}

async fn handle_command(
    client: &HttpServiceClient,
    delivery: &ArchiveDelivery,
    command: Command,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        Command::Scrape { url } => {
            app_info!("scrape url={}", url);
            let result = client.scrape(&url).await;
            let _ = event_tx.send(ClientEvent::ScrapeCompleted { result });
        }
        Command::Package { images, hostname } => {
            app_info!("package count={} hostname={}", images.len(), hostname);
            let result = package_and_deliver(client, delivery, &images, &hostname).await;
            let _ = event_tx.send(ClientEvent::DownloadCompleted { result });
        }
    }
}

async fn package_and_deliver(
    client: &HttpServiceClient,
    delivery: &ArchiveDelivery,
    images: &[String],
    hostname: &str,
) -> Result<DeliveredArchive, DownloadError> {
    let payload = client.package(images, hostname).await?;
    let archive = delivery.deliver(hostname, &payload)?;
    app_info!(
        "delivered {} ({} bytes)",
        archive.file_name,
        payload.len()
    );
    Ok(archive)
}
