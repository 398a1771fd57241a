//! Version-control collaborator used to fetch remote plugins
//!
//! The engine only needs two operations: clone a repository to a path and
//! check out a revision in it. Both are modeled on a trait so tests can
//! substitute a recording mock ([`MockGitClient`]) for the real CLI wrapper
//! ([`SystemGitClient`]).

mod mock;
mod system;

pub use mock::MockGitClient;
pub use system::SystemGitClient;

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the version-control client
#[derive(Error, Debug)]
pub enum GitError {
    /// The git binary could not be spawned
    #[error("Failed to spawn git: {0}")]
    Spawn(#[from] std::io::Error),

    /// `git clone` exited with a failure status
    #[error("Failed to clone {url}: {stderr}")]
    CloneFailed { url: String, stderr: String },

    /// `git checkout` exited with a failure status
    #[error("Failed to checkout {revision}: {stderr}")]
    CheckoutFailed { revision: String, stderr: String },
}

/// Client for the version-control system hosting remote plugins
///
/// Both operations are one-shot: the caller decides whether a clone is
/// needed; the client never inspects existing on-disk state.
#[async_trait]
pub trait GitClient: Send + Sync {
    /// Clone `url` into `destination`.
    async fn clone_into(&self, url: &str, destination: &Path) -> Result<(), GitError>;

    /// Check out `revision` (a tag name or commit SHA, treated uniformly)
    /// in the repository at `path`.
    async fn checkout(&self, revision: &str, path: &Path) -> Result<(), GitError>;
}
