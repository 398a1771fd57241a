//! Mock git client for testing
//!
//! MockGitClient records clone/checkout invocations instead of touching the
//! network, so tests can assert idempotency (a cached repository must not be
//! cloned twice) with call-count assertions.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{GitClient, GitError};

/// Mock implementation of GitClient for testing
///
/// By default every operation succeeds and is recorded. A clone creates the
/// destination directory with a `.git` marker, as a real clone would; call
/// `materialize_manifest()` to also have it drop a `Plugin.toml` there.
#[derive(Debug, Default)]
pub struct MockGitClient {
    clones: Mutex<Vec<(String, PathBuf)>>,
    checkouts: Mutex<Vec<(String, PathBuf)>>,
    manifest_name: Mutex<Option<String>>,
    clone_failure: Mutex<Option<String>>,
}

impl MockGitClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Have subsequent clones write a `Plugin.toml` with the given plugin
    /// name into the destination, as a real plugin repository would contain.
    pub fn materialize_manifest(&self, name: &str) {
        *self.manifest_name.lock().unwrap() = Some(name.to_string());
    }

    /// Make the next clone fail with the given stderr output.
    pub fn fail_next_clone(&self, stderr: &str) {
        *self.clone_failure.lock().unwrap() = Some(stderr.to_string());
    }

    /// Recorded `(url, destination)` pairs, in call order
    pub fn clone_calls(&self) -> Vec<(String, PathBuf)> {
        self.clones.lock().unwrap().clone()
    }

    /// Recorded `(revision, path)` pairs, in call order
    pub fn checkout_calls(&self) -> Vec<(String, PathBuf)> {
        self.checkouts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GitClient for MockGitClient {
    async fn clone_into(&self, url: &str, destination: &Path) -> Result<(), GitError> {
        if let Some(stderr) = self.clone_failure.lock().unwrap().take() {
            return Err(GitError::CloneFailed {
                url: url.to_string(),
                stderr,
            });
        }
        std::fs::create_dir_all(destination.join(".git"))?;
        if let Some(name) = self.manifest_name.lock().unwrap().as_deref() {
            std::fs::write(
                destination.join(crate::manifest::PLUGIN_MANIFEST_FILENAME),
                format!("name = \"{name}\"\n"),
            )?;
        }
        self.clones
            .lock()
            .unwrap()
            .push((url.to_string(), destination.to_path_buf()));
        Ok(())
    }

    async fn checkout(&self, revision: &str, path: &Path) -> Result<(), GitError> {
        self.checkouts
            .lock()
            .unwrap()
            .push((revision.to_string(), path.to_path_buf()));
        Ok(())
    }
}
