//! Configuration for the marker store.

use std::path::{Path, PathBuf};

/// Location of the marker document relative to the plugins directory.
pub const DEFAULT_SOURCE: &str = "dynmap/markers.yml";

/// Configuration for the marker store.
///
/// Controls where the externally owned marker document is read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Path of the marker document.
    pub source_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE),
        }
    }
}

impl StoreConfig {
    /// Creates a configuration reading the given file.
    #[must_use]
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
        }
    }

    /// Creates a configuration for a plugin whose data folder is `data_folder`.
    ///
    /// The marker document lives next to the data folder, inside the mapping
    /// tool's own plugin directory: `plugins/MarkerUtils` reads
    /// `plugins/dynmap/markers.yml`.
    #[must_use]
    pub fn for_plugin_folder(data_folder: &Path) -> Self {
        let plugins = data_folder.parent().unwrap_or_else(|| Path::new(""));
        Self::new(plugins.join(DEFAULT_SOURCE))
    }

    /// Builder method to set the source path.
    #[must_use]
    pub fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = path.into();
        self
    }
}
