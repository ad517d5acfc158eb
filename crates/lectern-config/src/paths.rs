//! Platform directories.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "Lectern";
const APPLICATION: &str = "Lectern";

/// Config and data directories for one installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl AppPaths {
    pub fn new(config_dir: impl Into<PathBuf>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            data_dir: data_dir.into(),
        }
    }

    /// Platform directories, or `./.lectern` when no home directory is known.
    pub fn discover() -> Self {
        match ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION) {
            Some(dirs) => Self::new(dirs.config_dir(), dirs.data_dir()),
            None => {
                tracing::warn!("No home directory found, using ./.lectern");
                Self::new(".lectern/config", ".lectern/data")
            }
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// TOML settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.toml")
    }

    /// Directory of the file-backed config repository.
    pub fn config_repository_dir(&self) -> PathBuf {
        self.config_dir.join("config")
    }

    /// Default publication storage root.
    pub fn publications_dir(&self) -> PathBuf {
        self.data_dir.join("publications")
    }
}
