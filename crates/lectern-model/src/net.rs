//! Network status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Connectivity as last observed by the main process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetStatus {
    /// No observation has been made yet.
    #[default]
    Unknown,
    Online,
    Offline,
}

impl fmt::Display for NetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unknown => "unknown",
            Self::Online => "online",
            Self::Offline => "offline",
        };
        f.write_str(label)
    }
}
