//! Imgsift client: collaborator HTTP adapters, archive delivery and the
//! background worker bridging them to the synchronous app threads.
mod api;
mod deliver;
mod handle;
mod types;

pub use api::{ClientSettings, HttpServiceClient, PackagingService, ScrapeService};
pub use deliver::{archive_file_name, ArchiveDelivery, DeliverError, DeliveredArchive};
pub use handle::{ClientConfig, ClientEvent, ServiceHandle};
pub use types::{ClientError, DownloadError, PackageRequest, ScrapeRequest, ScrapedPage};
