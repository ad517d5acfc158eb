//! Window identity types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier assigned to a window when it is created.
///
/// Used as the registry key and as the correlation key for per-window
/// reader state. Ordered so that iteration over keyed collections is
/// deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowIdentifier(Uuid);

impl WindowIdentifier {
    /// Generate a fresh, unique identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for WindowIdentifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WindowIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for WindowIdentifier {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Kind of application window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppWindowType {
    /// The anchor window listing the user's collection.
    Library,
    /// A window presenting a single publication.
    Reader,
}

impl AppWindowType {
    /// Get display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Library => "Library",
            Self::Reader => "Reader",
        }
    }
}

impl fmt::Display for AppWindowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
