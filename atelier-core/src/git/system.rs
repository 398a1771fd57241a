//! Git CLI wrapper

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use super::{GitClient, GitError};

/// GitClient that shells out to the system `git` binary
#[derive(Debug, Default, Clone)]
pub struct SystemGitClient;

impl SystemGitClient {
    pub fn new() -> Self {
        Self
    }

    async fn run(args: &[&str]) -> Result<std::process::Output, std::io::Error> {
        Command::new("git")
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
    }
}

#[async_trait]
impl GitClient for SystemGitClient {
    async fn clone_into(&self, url: &str, destination: &Path) -> Result<(), GitError> {
        tracing::debug!(url, destination = %destination.display(), "Cloning repository");
        let destination = destination.to_string_lossy();
        let output = Self::run(&["clone", url, &destination]).await?;
        if !output.status.success() {
            return Err(GitError::CloneFailed {
                url: url.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }

    async fn checkout(&self, revision: &str, path: &Path) -> Result<(), GitError> {
        tracing::debug!(revision, path = %path.display(), "Checking out revision");
        let path = path.to_string_lossy();
        let output = Self::run(&["-C", &path, "checkout", revision]).await?;
        if !output.status.success() {
            return Err(GitError::CheckoutFailed {
                revision: revision.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}
