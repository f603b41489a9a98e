use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use app_logging::{app_info, app_warn};
use imgsift_client::{ClientConfig, ClientError, ClientEvent, ClientSettings, ServiceHandle};
use imgsift_core::{Effect, Msg, PageScan};

/// Executes core effects against the collaborator services and feeds the
/// completions back into the message channel.
pub struct EffectRunner {
    handle: ServiceHandle,
}

impl EffectRunner {
    pub fn new(
        base_url: String,
        output_dir: PathBuf,
        msg_tx: mpsc::Sender<Msg>,
    ) -> Result<Self, ClientError> {
        let (event_tx, event_rx) = mpsc::channel();
        let handle = ServiceHandle::spawn(
            ClientConfig {
                settings: ClientSettings::new(base_url),
                output_dir,
            },
            event_tx,
        )?;
        spawn_event_loop(event_rx, msg_tx);
        Ok(Self { handle })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScrapePage { url } => {
                    app_info!("ScrapePage url={}", url);
                    self.handle.scrape(url);
                }
                Effect::PackageImages { images, hostname } => {
                    app_info!("PackageImages count={} hostname={}", images.len(), hostname);
                    self.handle.package(images, hostname);
                }
            }
        }
    }
}

fn spawn_event_loop(event_rx: mpsc::Receiver<ClientEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            let msg = match event {
                ClientEvent::ScrapeCompleted { result } => Msg::ScrapeFinished(
                    result
                        .map(|page| PageScan {
                            images: page.images,
                            hostname: page.hostname,
                        })
                        .map_err(|err| {
                            app_warn!("scrape failed: {}", err);
                            err.to_string()
                        }),
                ),
                ClientEvent::DownloadCompleted { result } => Msg::DownloadFinished(
                    result.map(|archive| archive.file_name).map_err(|err| {
                        app_warn!("download failed: {}", err);
                        err.to_string()
                    }),
                ),
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}
