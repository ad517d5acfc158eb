//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Config repository error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Keys name files, so they are restricted to a safe character set.
    #[error("invalid config key: {key:?}")]
    InvalidKey { key: String },

    /// No document is stored under this key.
    #[error("no config document for key {key:?}")]
    NotFound { key: String },

    /// File I/O error.
    #[error("Failed to {operation} config file: {}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored document could not be encoded or decoded.
    #[error("Failed to (de)serialize config document {key:?}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The blocking I/O task did not complete.
    #[error("Config I/O task failed")]
    Task {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl ConfigError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Settings file error.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to {operation} settings file: {}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize settings")]
    Serialize(#[from] toml::ser::Error),
}

/// Why a stored locale could not be used.
#[derive(Debug, Error)]
pub enum LocaleError {
    /// The repository refused or failed the lookup.
    #[error("config repository lookup failed")]
    Repository(#[from] ConfigError),

    /// A document exists but does not hold a usable locale.
    #[error("stored locale is malformed: {reason}")]
    Malformed { reason: String },
}

/// Result type for config repository operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
