//! Resolved plugin artifact types

use std::path::PathBuf;

/// Whether a plugin was resolved from the local filesystem or from the
/// cache of a remote repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginOrigin {
    Local,
    Remote,
}

/// Project-description helpers contributed by one plugin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptionHelpersPlugin {
    /// Name from the plugin's manifest
    pub name: String,
    /// The plugin's `ProjectDescriptionHelpers/` directory
    pub path: PathBuf,
    pub origin: PluginOrigin,
}

/// Resource-synthesizer templates contributed by one plugin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginResourceSynthesizer {
    /// Name from the plugin's manifest
    pub name: String,
    /// The plugin's `ResourceSynthesizers/` directory
    pub path: PathBuf,
}

/// All artifacts contributed by the configured plugins
///
/// Each list preserves the order of the plugin list in the project
/// configuration. Duplicate names from different plugins are kept as
/// separate entries; ambiguity resolution is a downstream concern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plugins {
    pub project_description_helpers: Vec<ProjectDescriptionHelpersPlugin>,
    pub resource_synthesizers: Vec<PluginResourceSynthesizer>,
    pub template_paths: Vec<PathBuf>,
}

/// Resolved on-disk locations for one remote plugin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePluginPaths {
    /// Checked-out repository root, or its configured subdirectory
    pub repository_path: PathBuf,
    /// Unpacked pre-built release bundle, when one exists on disk
    pub release_path: Option<PathBuf>,
}
