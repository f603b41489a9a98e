use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeliverError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Filename under which an archive for `hostname` is presented to the user.
pub fn archive_file_name(hostname: &str) -> String {
    format!("images_{hostname}.zip")
}

/// An archive that reached the user's disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveredArchive {
    pub file_name: String,
    pub path: PathBuf,
}

/// Writes archive payloads into a delivery directory. Payloads land in a
/// temp file first and are renamed into place, so the transient handle is
/// released and a torn write never shows up under the final name.
pub struct ArchiveDelivery {
    dir: PathBuf,
}

impl ArchiveDelivery {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn deliver(&self, hostname: &str, payload: &[u8]) -> Result<DeliveredArchive, DeliverError> {
        ensure_delivery_dir(&self.dir)?;

        let file_name = archive_file_name(hostname);
        let target = self.dir.join(&file_name);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(payload)?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // Replace an existing archive from an earlier download of the same page.
        if target.exists() {
            fs::remove_file(&target)?;
        }
        tmp.persist(&target).map_err(|e| DeliverError::Io(e.error))?;
        Ok(DeliveredArchive {
            file_name,
            path: target,
        })
    }
}

/// Ensure the delivery directory exists and is writable; create if missing.
fn ensure_delivery_dir(dir: &Path) -> Result<(), DeliverError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| DeliverError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(DeliverError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| DeliverError::OutputDir(e.to_string()))?;
    }
    // Basic writability probe: try creating a temp file.
    NamedTempFile::new_in(dir).map_err(|e| DeliverError::OutputDir(e.to_string()))?;
    Ok(())
}
