//! Plugin resolution error types

use std::path::PathBuf;

use thiserror::Error;

use crate::archive::ArchiveError;
use crate::git::GitError;
use crate::manifest::ManifestError;

/// Errors surfaced by plugin fetching and loading
///
/// Every failure is fatal for the whole load: a missing or broken plugin
/// silently omitted would produce an incomplete build configuration. No
/// automatic retry is performed; retry policy belongs to the caller.
#[derive(Error, Debug)]
pub enum PluginError {
    /// Clone or checkout of a remote plugin failed
    #[error("Failed to fetch plugin from {url}: {source}")]
    RemoteFetch {
        url: String,
        #[source]
        source: GitError,
    },

    /// Download or unpack of a release bundle failed
    #[error("Failed to fetch release from {url}: {source}")]
    ReleaseFetch {
        url: String,
        #[source]
        source: ArchiveError,
    },

    /// The plugin's manifest is missing or malformed
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// A local plugin path does not point at a directory
    #[error("Plugin not found at {path}")]
    InvalidLocation { path: PathBuf },

    /// Filesystem error while preparing cache directories
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
