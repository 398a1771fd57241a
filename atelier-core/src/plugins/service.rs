//! Plugin resolution: loading and aggregation

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::manifest::ManifestReader;
use crate::templates::TemplatesDirectoryLocator;

use super::error::PluginError;
use super::fetcher::RemoteFetcher;
use super::location::PluginLocation;
use super::types::{
    PluginOrigin, PluginResourceSynthesizer, Plugins, ProjectDescriptionHelpersPlugin,
    RemotePluginPaths,
};

/// Subdirectory plugins use to publish project-description helpers
pub const HELPERS_DIRECTORY_NAME: &str = "ProjectDescriptionHelpers";
/// Subdirectory plugins use to publish resource-synthesizer templates
pub const RESOURCE_SYNTHESIZERS_DIRECTORY_NAME: &str = "ResourceSynthesizers";

/// Resolves configured plugin locations into their artifacts
pub struct PluginService {
    manifest_reader: Arc<dyn ManifestReader>,
    templates_locator: Arc<dyn TemplatesDirectoryLocator>,
    fetcher: RemoteFetcher,
}

impl PluginService {
    pub fn new(
        manifest_reader: Arc<dyn ManifestReader>,
        templates_locator: Arc<dyn TemplatesDirectoryLocator>,
        fetcher: RemoteFetcher,
    ) -> Self {
        Self {
            manifest_reader,
            templates_locator,
            fetcher,
        }
    }

    /// Cache paths for every remote plugin, in input order, without
    /// fetching anything. Local locations contribute no entry.
    pub fn remote_plugin_paths(&self, locations: &[PluginLocation]) -> Vec<RemotePluginPaths> {
        locations
            .iter()
            .filter_map(|location| match location {
                PluginLocation::Local { .. } => None,
                PluginLocation::Git {
                    url,
                    reference,
                    directory,
                    ..
                } => Some(
                    self.fetcher
                        .remote_plugin_paths(url, reference, directory.as_deref()),
                ),
            })
            .collect()
    }

    /// Populate the cache for every remote plugin, in input order.
    ///
    /// Fails fast: the first fetch error aborts the remaining locations.
    pub async fn fetch_remote_plugins(
        &self,
        locations: &[PluginLocation],
    ) -> Result<Vec<RemotePluginPaths>, PluginError> {
        let mut paths = Vec::new();
        for location in locations {
            if let PluginLocation::Git {
                url,
                reference,
                directory,
                release_url,
            } = location
            {
                paths.push(
                    self.fetcher
                        .fetch(url, reference, directory.as_deref(), release_url.as_deref())
                        .await?,
                );
            }
        }
        Ok(paths)
    }

    /// Resolve and load every configured plugin into one aggregate.
    ///
    /// Resolution is sequential and fail-fast: the first location that
    /// fails to resolve or load aborts the whole load, and no partial
    /// aggregate is returned. Artifact order matches input order; duplicate
    /// names from different plugins are kept.
    pub async fn load_plugins(
        &self,
        locations: &[PluginLocation],
    ) -> Result<Plugins, PluginError> {
        let mut plugins = Plugins::default();
        for location in locations {
            let (root, origin) = self.resolve(location).await?;
            self.load_plugin(&root, origin, &mut plugins)?;
        }
        tracing::debug!(
            helpers = plugins.project_description_helpers.len(),
            synthesizers = plugins.resource_synthesizers.len(),
            templates = plugins.template_paths.len(),
            "Loaded plugins"
        );
        Ok(plugins)
    }

    async fn resolve(
        &self,
        location: &PluginLocation,
    ) -> Result<(PathBuf, PluginOrigin), PluginError> {
        match location {
            PluginLocation::Local { path } => {
                if !path.is_dir() {
                    return Err(PluginError::InvalidLocation { path: path.clone() });
                }
                Ok((path.clone(), PluginOrigin::Local))
            }
            PluginLocation::Git {
                url,
                reference,
                directory,
                release_url,
            } => {
                let paths = self
                    .fetcher
                    .fetch(url, reference, directory.as_deref(), release_url.as_deref())
                    .await?;
                Ok((paths.repository_path, PluginOrigin::Remote))
            }
        }
    }

    fn load_plugin(
        &self,
        root: &Path,
        origin: PluginOrigin,
        plugins: &mut Plugins,
    ) -> Result<(), PluginError> {
        let manifest = self.manifest_reader.read(root)?;
        tracing::debug!(name = %manifest.name, root = %root.display(), "Loaded plugin manifest");

        // A plugin may contribute none, one, or all three artifact kinds;
        // missing subdirectories are not an error.
        let helpers_path = root.join(HELPERS_DIRECTORY_NAME);
        if helpers_path.is_dir() {
            plugins
                .project_description_helpers
                .push(ProjectDescriptionHelpersPlugin {
                    name: manifest.name.clone(),
                    path: helpers_path,
                    origin,
                });
        }

        let synthesizers_path = root.join(RESOURCE_SYNTHESIZERS_DIRECTORY_NAME);
        if synthesizers_path.is_dir() {
            plugins.resource_synthesizers.push(PluginResourceSynthesizer {
                name: manifest.name.clone(),
                path: synthesizers_path,
            });
        }

        plugins
            .template_paths
            .extend(self.templates_locator.locate(root)?);

        Ok(())
    }
}
