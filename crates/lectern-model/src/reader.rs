//! Reader types: mode, per-window reader records and reading preferences.

use serde::{Deserialize, Serialize};

use crate::window::WindowIdentifier;

/// Whether the reader is embedded in the library window or has its own window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReaderMode {
    /// Reader shares the library window.
    #[default]
    Attached,
    /// Reader runs in a separate window.
    Detached,
}

/// A publication opened in a reader window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReaderStateReader {
    /// Reader instance identifier.
    pub identifier: String,
    /// Identifier of the publication being read.
    pub publication_identifier: String,
    /// URL of the publication manifest served to the renderer.
    pub manifest_url: String,
    /// Window hosting this reader.
    pub window_identifier: WindowIdentifier,
}

impl ReaderStateReader {
    /// Create a reader record for a publication shown in `window_identifier`.
    pub fn new(
        identifier: impl Into<String>,
        publication_identifier: impl Into<String>,
        manifest_url: impl Into<String>,
        window_identifier: WindowIdentifier,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            publication_identifier: publication_identifier.into(),
            manifest_url: manifest_url.into(),
            window_identifier,
        }
    }
}

/// Reading preferences shared by every reader window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReaderConfig {
    pub align: String,
    pub col_count: String,
    pub dark: bool,
    pub font: String,
    pub font_size: String,
    pub invert: bool,
    pub line_height: String,
    pub night: bool,
    pub paged: bool,
    pub readiumcss: bool,
    pub sepia: bool,
    pub word_spacing: String,
    pub letter_spacing: String,
    pub page_margins: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            align: "auto".to_string(),
            col_count: "auto".to_string(),
            dark: false,
            font: "DEFAULT".to_string(),
            font_size: "100%".to_string(),
            invert: false,
            line_height: "1.5".to_string(),
            night: false,
            paged: false,
            readiumcss: true,
            sepia: false,
            word_spacing: "0rem".to_string(),
            letter_spacing: "0rem".to_string(),
            page_margins: "1".to_string(),
        }
    }
}
