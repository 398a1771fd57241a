//! Plugin cache directory layout
//!
//! The cache root is process-wide state with an explicit lifecycle: fixed at
//! construction, queried on demand, never enumerated into memory. Writers
//! only ever create new fingerprint directories; nothing here mutates or
//! deletes existing entries, so already-populated entries are safe to read
//! concurrently.

use std::path::PathBuf;

/// Namespaces under the cache root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheCategory {
    /// Fetched remote plugins, keyed by fingerprint
    Plugins,
}

impl CacheCategory {
    pub fn directory_name(self) -> &'static str {
        match self {
            CacheCategory::Plugins => "plugins",
        }
    }
}

/// Maps cache categories and plugin fingerprints to on-disk locations
///
/// Queries are pure path computations and never fail; directories are
/// created lazily by whoever writes into them.
#[derive(Debug, Clone)]
pub struct CacheDirectoriesProvider {
    root: PathBuf,
}

impl CacheDirectoriesProvider {
    /// Provider rooted at the user's cache directory
    pub fn new() -> Self {
        Self {
            root: atelier_paths::cache_dir(),
        }
    }

    /// Provider rooted at an explicit path (tests, sandboxed runs)
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory for one cache category
    pub fn cache_directory(&self, category: CacheCategory) -> PathBuf {
        self.root.join(category.directory_name())
    }

    /// Cache directory for one remote plugin
    pub fn plugin_directory(&self, fingerprint: &str) -> PathBuf {
        self.cache_directory(CacheCategory::Plugins).join(fingerprint)
    }
}

impl Default for CacheDirectoriesProvider {
    fn default() -> Self {
        Self::new()
    }
}
