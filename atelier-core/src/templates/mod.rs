//! Scaffolding-template discovery
//!
//! Plugins publish scaffolding templates as subdirectories of a fixed
//! `Templates/` folder at their root. Discovery is behind a trait so the
//! loader can be tested with a stub locator.

use std::path::{Path, PathBuf};

/// Directory plugins use to publish scaffolding templates
pub const TEMPLATES_DIRECTORY_NAME: &str = "Templates";

/// Locates scaffolding-template directories inside a plugin
pub trait TemplatesDirectoryLocator: Send + Sync {
    /// Template directories under `plugin_root`. A plugin without a
    /// `Templates/` folder contributes none; that is not an error.
    fn locate(&self, plugin_root: &Path) -> std::io::Result<Vec<PathBuf>>;
}

/// Filesystem locator: each subdirectory of `<root>/Templates` is one template
///
/// Results are sorted by name so discovery order is deterministic.
#[derive(Debug, Default, Clone)]
pub struct FsTemplatesDirectoryLocator;

impl FsTemplatesDirectoryLocator {
    pub fn new() -> Self {
        Self
    }
}

impl TemplatesDirectoryLocator for FsTemplatesDirectoryLocator {
    fn locate(&self, plugin_root: &Path) -> std::io::Result<Vec<PathBuf>> {
        let templates_dir = plugin_root.join(TEMPLATES_DIRECTORY_NAME);
        if !templates_dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut directories = Vec::new();
        for entry in std::fs::read_dir(&templates_dir)? {
            let path = entry?.path();
            if path.is_dir() {
                directories.push(path);
            }
        }
        directories.sort();
        Ok(directories)
    }
}
