//! XDG Base Directory paths for atelier.
//!
//! CLI tools should use XDG paths for cross-platform consistency,
//! not platform-native paths. This matches tools like gh, docker, kubectl.

use std::path::PathBuf;

/// Get the atelier config directory.
///
/// Returns `$XDG_CONFIG_HOME/atelier` if set, otherwise `~/.config/atelier`.
/// This is where project-independent configuration is stored.
///
/// # Examples
///
/// ```
/// use atelier_paths::config_dir;
///
/// let config = config_dir();
/// let settings = config.join("settings.toml");
/// ```
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join("atelier")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".config/atelier")
    } else {
        PathBuf::from(".config/atelier")
    }
}

/// Get the atelier cache directory.
///
/// Returns `$XDG_CACHE_HOME/atelier` if set, otherwise `~/.cache/atelier`.
/// Fetched plugins are cached beneath this directory and persist across
/// invocations; atelier never deletes entries from it.
///
/// # Examples
///
/// ```
/// use atelier_paths::cache_dir;
///
/// let cache = cache_dir();
/// let plugins_cache = cache.join("plugins");
/// ```
pub fn cache_dir() -> PathBuf {
    if let Ok(xdg_cache) = std::env::var("XDG_CACHE_HOME") {
        PathBuf::from(xdg_cache).join("atelier")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".cache/atelier")
    } else {
        PathBuf::from(".cache/atelier")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_ends_with_atelier() {
        let path = config_dir();
        assert!(
            path.ends_with("atelier"),
            "config_dir should end with 'atelier'"
        );
    }

    #[test]
    fn test_cache_dir_ends_with_atelier() {
        let path = cache_dir();
        assert!(
            path.ends_with("atelier"),
            "cache_dir should end with 'atelier'"
        );
    }

    #[test]
    fn test_config_dir_respects_xdg_env() {
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", "/tmp/test-config");
        }
        let path = config_dir();
        assert_eq!(path, PathBuf::from("/tmp/test-config/atelier"));
        unsafe {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    #[test]
    fn test_cache_dir_respects_xdg_env() {
        unsafe {
            std::env::set_var("XDG_CACHE_HOME", "/tmp/test-cache");
        }
        let path = cache_dir();
        assert_eq!(path, PathBuf::from("/tmp/test-cache/atelier"));
        unsafe {
            std::env::remove_var("XDG_CACHE_HOME");
        }
    }
}
