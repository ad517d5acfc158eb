//! Stored config documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A JSON value stored under a key, with bookkeeping timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    /// Key the document is stored under.
    pub identifier: String,
    pub value: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ConfigDocument {
    /// Create a document stamped with the current time.
    pub fn new(identifier: impl Into<String>, value: Value) -> Self {
        let now = Utc::now();
        Self {
            identifier: identifier.into(),
            value,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
