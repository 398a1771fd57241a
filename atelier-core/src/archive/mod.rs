//! Release-bundle download and unpack collaborators
//!
//! Remote plugins may publish a pre-built release bundle next to their
//! sources. The fetcher downloads it with a [`FileClient`] and unpacks it
//! with an [`Unarchiver`]; both are traits so tests can substitute doubles.

mod http;
mod unzip;

pub use http::HttpFileClient;
pub use unzip::ZipUnarchiver;

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from downloading or unpacking a release bundle
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The download request failed
    #[error("Failed to download {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("Download of {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The downloaded bytes are not a valid archive
    #[error("Failed to unpack archive: {0}")]
    Unpack(#[from] zip::result::ZipError),

    /// IO error while writing unpacked files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Downloads a file into memory
#[async_trait]
pub trait FileClient: Send + Sync {
    async fn download(&self, url: &str) -> Result<Vec<u8>, ArchiveError>;
}

/// Unpacks an in-memory archive onto disk
pub trait Unarchiver: Send + Sync {
    /// Unpack `bytes` into `destination`, creating it if needed.
    fn unpack(&self, bytes: &[u8], destination: &Path) -> Result<(), ArchiveError>;
}
