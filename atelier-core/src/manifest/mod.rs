//! Plugin manifest reading
//!
//! Every plugin declares its identity in a `Plugin.toml` at its root
//! directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// File that declares a plugin at its root directory
pub const PLUGIN_MANIFEST_FILENAME: &str = "Plugin.toml";

/// Errors from reading a plugin manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    /// No manifest file at the plugin root
    #[error("Plugin manifest not found at {path}")]
    NotFound { path: PathBuf },

    /// The manifest file is not valid TOML or misses required fields
    #[error("Failed to parse plugin manifest at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// IO error while reading the manifest
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A plugin's declared identity
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PluginManifest {
    /// Plugin name, used as provenance on its artifacts
    pub name: String,
}

/// Reads a plugin manifest from a plugin's root directory
pub trait ManifestReader: Send + Sync {
    fn read(&self, plugin_root: &Path) -> Result<PluginManifest, ManifestError>;
}

/// ManifestReader that parses `Plugin.toml`
#[derive(Debug, Default, Clone)]
pub struct TomlManifestReader;

impl TomlManifestReader {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestReader for TomlManifestReader {
    fn read(&self, plugin_root: &Path) -> Result<PluginManifest, ManifestError> {
        let path = plugin_root.join(PLUGIN_MANIFEST_FILENAME);
        if !path.exists() {
            return Err(ManifestError::NotFound { path });
        }
        let content = std::fs::read_to_string(&path)?;
        let manifest =
            toml::from_str(&content).map_err(|source| ManifestError::Parse { path, source })?;
        Ok(manifest)
    }
}
