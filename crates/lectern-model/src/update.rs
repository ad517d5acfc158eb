//! Application update status.

use serde::{Deserialize, Serialize};

/// Result of the most recent update check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UpdateStatus {
    /// No check has completed, or the installed version is current.
    #[default]
    Unknown,
    /// A newer version is available.
    Update,
    /// A newer version with security fixes is available.
    SecurityUpdate,
}

/// Update slice of the application state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateState {
    pub status: UpdateStatus,
    pub latest_version: Option<String>,
    pub latest_version_url: Option<String>,
}

impl UpdateState {
    /// Check if an update of any kind is available.
    pub fn is_update_available(&self) -> bool {
        !matches!(self.status, UpdateStatus::Unknown)
    }
}
