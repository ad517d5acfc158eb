//! Actions accepted by the store.

use lectern_model::{
    NetStatus, ReaderConfig, ReaderMode, ReaderStateReader, UpdateStatus, WindowIdentifier,
};
use serde::{Deserialize, Serialize};

/// Every state change the main process can make.
///
/// Serialized as `{"type": "...", "payload": {...}}` so the same value can be
/// relayed verbatim to renderer processes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all_fields = "camelCase")]
pub enum Action {
    /// Main process finished bootstrapping.
    #[serde(rename = "APP_INIT")]
    AppInit,

    #[serde(rename = "NET_STATUS_ONLINE")]
    NetOnline,

    #[serde(rename = "NET_STATUS_OFFLINE")]
    NetOffline,

    /// Connectivity could not be determined.
    #[serde(rename = "NET_STATUS_UNKNOWN")]
    NetUnknown,

    /// A reader was opened. `None` tells a renderer it hosts no reader.
    #[serde(rename = "READER_OPEN_SUCCESS")]
    ReaderOpenSuccess { reader: Option<ReaderStateReader> },

    /// The reader hosted by a window was closed.
    #[serde(rename = "READER_CLOSE_SUCCESS")]
    ReaderCloseSuccess { window_identifier: WindowIdentifier },

    #[serde(rename = "READER_CONFIG_SET_SUCCESS")]
    ReaderConfigSetSuccess { config: ReaderConfig },

    #[serde(rename = "READER_MODE_SET_SUCCESS")]
    ReaderModeSetSuccess { mode: ReaderMode },

    #[serde(rename = "I18N_SET")]
    I18nSet { locale: String },

    #[serde(rename = "UPDATE_LATEST_VERSION_SET")]
    UpdateLatestVersionSet {
        status: UpdateStatus,
        latest_version: Option<String>,
        latest_version_url: Option<String>,
    },
}

impl Action {
    /// Build the action that announces `status`.
    ///
    /// The mapping is total: every status has its own action.
    pub fn for_net_status(status: NetStatus) -> Self {
        match status {
            NetStatus::Online => Self::NetOnline,
            NetStatus::Offline => Self::NetOffline,
            NetStatus::Unknown => Self::NetUnknown,
        }
    }

    /// Wire name of this action.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::AppInit => "APP_INIT",
            Self::NetOnline => "NET_STATUS_ONLINE",
            Self::NetOffline => "NET_STATUS_OFFLINE",
            Self::NetUnknown => "NET_STATUS_UNKNOWN",
            Self::ReaderOpenSuccess { .. } => "READER_OPEN_SUCCESS",
            Self::ReaderCloseSuccess { .. } => "READER_CLOSE_SUCCESS",
            Self::ReaderConfigSetSuccess { .. } => "READER_CONFIG_SET_SUCCESS",
            Self::ReaderModeSetSuccess { .. } => "READER_MODE_SET_SUCCESS",
            Self::I18nSet { .. } => "I18N_SET",
            Self::UpdateLatestVersionSet { .. } => "UPDATE_LATEST_VERSION_SET",
        }
    }

    /// Check if renderers mirror this action.
    ///
    /// Bootstrap actions only concern the main process. An empty reader
    /// payload belongs to a single window's replay.
    pub fn is_broadcast(&self) -> bool {
        !matches!(
            self,
            Self::AppInit | Self::ReaderOpenSuccess { reader: None }
        )
    }
}
