//! Remote plugin fetching and caching

use std::sync::Arc;

use crate::archive::{FileClient, Unarchiver};
use crate::cache::CacheDirectoriesProvider;
use crate::git::GitClient;

use super::error::PluginError;
use super::fingerprint::fingerprint;
use super::location::GitReference;
use super::types::RemotePluginPaths;

/// Subdirectory of a plugin cache entry holding the checked-out repository
pub const REPOSITORY_DIRECTORY: &str = "repository";
/// Subdirectory holding the unpacked release bundle, when one was fetched
pub const RELEASE_DIRECTORY: &str = "release";

/// Marker that a working checkout is present in `repository/`
const VCS_MARKER: &str = ".git";

/// Fetches remote plugins into the fingerprint-keyed cache
///
/// Fetching is idempotent: a cache entry whose `repository/` already
/// contains a checkout (a `.git` marker) is trusted as-is, with no clone,
/// checkout, or integrity re-verification. A stale or corrupted entry is
/// therefore not self-healing and must be invalidated externally (delete
/// the fingerprint directory).
pub struct RemoteFetcher {
    cache: CacheDirectoriesProvider,
    git: Arc<dyn GitClient>,
    file_client: Arc<dyn FileClient>,
    unarchiver: Arc<dyn Unarchiver>,
}

impl RemoteFetcher {
    pub fn new(
        cache: CacheDirectoriesProvider,
        git: Arc<dyn GitClient>,
        file_client: Arc<dyn FileClient>,
        unarchiver: Arc<dyn Unarchiver>,
    ) -> Self {
        Self {
            cache,
            git,
            file_client,
            unarchiver,
        }
    }

    /// Cache paths for a remote plugin, without fetching anything.
    ///
    /// `release_path` reflects what is currently on disk: `Some` iff the
    /// release directory exists.
    pub fn remote_plugin_paths(
        &self,
        url: &str,
        reference: &GitReference,
        directory: Option<&str>,
    ) -> RemotePluginPaths {
        let plugin_directory = self.cache.plugin_directory(&fingerprint(url, reference));
        let mut repository_path = plugin_directory.join(REPOSITORY_DIRECTORY);
        if let Some(directory) = directory {
            repository_path = repository_path.join(directory);
        }
        let release_directory = plugin_directory.join(RELEASE_DIRECTORY);
        let release_path = release_directory.exists().then_some(release_directory);
        RemotePluginPaths {
            repository_path,
            release_path,
        }
    }

    /// Fetch a remote plugin into the cache, skipping work already
    /// satisfied on disk, and return its resolved paths.
    ///
    /// The configured subdirectory is joined onto the returned
    /// `repository_path` without validating that it exists; validation is
    /// deferred to the loader.
    pub async fn fetch(
        &self,
        url: &str,
        reference: &GitReference,
        directory: Option<&str>,
        release_url: Option<&str>,
    ) -> Result<RemotePluginPaths, PluginError> {
        let plugin_directory = self.cache.plugin_directory(&fingerprint(url, reference));
        let repository_directory = plugin_directory.join(REPOSITORY_DIRECTORY);
        let release_directory = plugin_directory.join(RELEASE_DIRECTORY);

        if let Some(release_url) = release_url {
            if release_directory.exists() {
                tracing::debug!(url = release_url, "Release bundle already cached");
            } else {
                tracing::info!(url = release_url, "Downloading plugin release bundle");
                let bytes = self.file_client.download(release_url).await.map_err(
                    |source| PluginError::ReleaseFetch {
                        url: release_url.to_string(),
                        source,
                    },
                )?;
                self.unarchiver
                    .unpack(&bytes, &release_directory)
                    .map_err(|source| PluginError::ReleaseFetch {
                        url: release_url.to_string(),
                        source,
                    })?;
            }
        }

        if repository_directory.join(VCS_MARKER).exists() {
            tracing::debug!(url, "Plugin repository already cached, skipping clone");
        } else {
            std::fs::create_dir_all(&plugin_directory)?;
            tracing::info!(url, reference = reference.as_str(), "Cloning plugin");
            self.git
                .as_ref()
                .clone_into(url, &repository_directory)
                .await
                .map_err(|source| PluginError::RemoteFetch {
                    url: url.to_string(),
                    source,
                })?;
            self.git
                .checkout(reference.as_str(), &repository_directory)
                .await
                .map_err(|source| PluginError::RemoteFetch {
                    url: url.to_string(),
                    source,
                })?;
        }

        let mut repository_path = repository_directory;
        if let Some(directory) = directory {
            repository_path = repository_path.join(directory);
        }
        let release_path = release_directory.exists().then_some(release_directory);
        Ok(RemotePluginPaths {
            repository_path,
            release_path,
        })
    }
}
