//! atelier-core: plugin resolution and caching for the atelier build-configuration tool
//!
//! This crate provides the plugin engine for atelier:
//!
//! - **Plugin resolution** - [`PluginService`] resolves configured plugin locations
//!   (local paths or pinned git repositories) into their artifacts
//! - **Remote fetching** - [`RemoteFetcher`] clones and checks out remote plugins
//!   into a content-addressed cache, skipping work already satisfied on disk
//! - **Cache layout** - [`CacheDirectoriesProvider`] maps fingerprints to
//!   deterministic on-disk locations
//! - **Collaborator seams** - [`git::GitClient`], [`archive::FileClient`],
//!   [`manifest::ManifestReader`], and [`templates::TemplatesDirectoryLocator`]
//!   traits for swappable version-control, download, and discovery backends
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use atelier_core::archive::{HttpFileClient, ZipUnarchiver};
//! use atelier_core::git::SystemGitClient;
//! use atelier_core::manifest::TomlManifestReader;
//! use atelier_core::templates::FsTemplatesDirectoryLocator;
//! use atelier_core::{
//!     CacheDirectoriesProvider, GitReference, PluginLocation, PluginService, RemoteFetcher,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = RemoteFetcher::new(
//!     CacheDirectoriesProvider::new(),
//!     Arc::new(SystemGitClient::new()),
//!     Arc::new(HttpFileClient::new()),
//!     Arc::new(ZipUnarchiver::new()),
//! );
//! let service = PluginService::new(
//!     Arc::new(TomlManifestReader::new()),
//!     Arc::new(FsTemplatesDirectoryLocator::new()),
//!     fetcher,
//! );
//!
//! let locations = vec![PluginLocation::Git {
//!     url: "https://github.com/example/plugin.git".to_string(),
//!     reference: GitReference::Tag("1.0.0".to_string()),
//!     directory: None,
//!     release_url: None,
//! }];
//! let plugins = service.load_plugins(&locations).await?;
//! println!("{} helper modules", plugins.project_description_helpers.len());
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod cache;
pub mod git;
pub mod manifest;
pub mod plugins;
pub mod templates;

// Re-export key types for convenience
pub use cache::{CacheCategory, CacheDirectoriesProvider};
pub use plugins::{
    GitReference, PluginError, PluginLocation, PluginOrigin, PluginResourceSynthesizer,
    PluginService, Plugins, ProjectDescriptionHelpersPlugin, RELEASE_DIRECTORY,
    REPOSITORY_DIRECTORY, RemoteFetcher, RemotePluginPaths, fingerprint,
};
