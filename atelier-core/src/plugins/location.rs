//! Plugin location types

use std::path::PathBuf;

/// Exact revision of a remote plugin
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GitReference {
    /// A tag name
    Tag(String),
    /// A commit SHA
    Sha(String),
}

impl GitReference {
    /// The raw revision string handed to checkout; tags and SHAs are
    /// passed through uniformly.
    pub fn as_str(&self) -> &str {
        match self {
            GitReference::Tag(name) => name,
            GitReference::Sha(commit) => commit,
        }
    }
}

/// Where a plugin lives
///
/// Cache identity for remote plugins is `(url, reference)`; `directory` and
/// `release_url` do not affect the cache key, only the resolved path within
/// the cached repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginLocation {
    /// Plugin sources on the local filesystem
    Local { path: PathBuf },
    /// Plugin sources in a git repository pinned to a revision
    Git {
        url: String,
        reference: GitReference,
        /// Subdirectory of the repository holding the plugin, if not the root
        directory: Option<String>,
        /// URL of a pre-built release bundle published for this revision
        release_url: Option<String>,
    },
}
