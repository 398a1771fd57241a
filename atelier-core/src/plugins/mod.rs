//! Plugin resolution and caching
//!
//! This module turns the declarative plugin list of a project configuration
//! into a single [`Plugins`] aggregate:
//!
//! - [`PluginLocation`]: a local path or a git repository pinned to a revision
//! - [`RemoteFetcher`]: clones/checks out remote plugins into a
//!   fingerprint-keyed cache, skipping work already satisfied on disk
//! - [`PluginService`]: resolves each location, loads its manifest, and
//!   discovers the three artifact kinds a plugin can contribute
//!
//! # Cache layout
//!
//! Each remote plugin is cached under
//! `<cache root>/plugins/<fingerprint>/`, where the fingerprint is derived
//! from `(url, reference)`:
//! - `repository/` - the checked-out sources
//! - `release/` - the unpacked pre-built bundle, when one was configured
//!
//! Cache entries persist across invocations and are never deleted here.
//!
//! # Example
//!
//! ```ignore
//! let service = PluginService::new(manifest_reader, templates_locator, fetcher);
//!
//! // Populate the cache for every remote plugin.
//! service.fetch_remote_plugins(&locations).await?;
//!
//! // Resolve all locations into one ordered aggregate.
//! let plugins = service.load_plugins(&locations).await?;
//! ```

mod error;
mod fetcher;
mod fingerprint;
mod location;
mod service;
mod types;

pub use error::PluginError;
pub use fetcher::{RELEASE_DIRECTORY, REPOSITORY_DIRECTORY, RemoteFetcher};
pub use fingerprint::fingerprint;
pub use location::{GitReference, PluginLocation};
pub use service::{
    HELPERS_DIRECTORY_NAME, PluginService, RESOURCE_SYNTHESIZERS_DIRECTORY_NAME,
};
pub use types::{
    PluginOrigin, PluginResourceSynthesizer, Plugins, ProjectDescriptionHelpersPlugin,
    RemotePluginPaths,
};
