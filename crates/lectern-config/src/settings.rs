//! Persisted user settings.
//!
//! Settings are read once at startup. A missing or unreadable file yields
//! defaults; command-line flags override whatever is set here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::paths::AppPaths;

/// Application settings, serialized to TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub storage: StorageSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Publication storage root; the platform data directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Level name such as `info` or `debug`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// `pretty`, `compact` or `json`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Settings {
    /// Load settings from the platform location.
    pub fn load(paths: &AppPaths) -> Self {
        Self::load_from(&paths.settings_file())
    }

    /// Load settings from a specific path, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(settings) => settings,
            Err(SettingsError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Self::default()
            }
            Err(error) => {
                tracing::warn!(%error, "Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings, reporting why the file could not be used.
    pub fn try_load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            operation: "read",
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                operation: "create directory for",
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| SettingsError::Io {
            operation: "write",
            path: path.to_path_buf(),
            source,
        })
    }

    /// Effective publication storage root.
    pub fn storage_root(&self, paths: &AppPaths) -> PathBuf {
        self.storage
            .root
            .clone()
            .unwrap_or_else(|| paths.publications_dir())
    }
}
