//! State tree slices.

use std::collections::BTreeMap;

use lectern_model::{
    DEFAULT_LOCALE, NetStatus, ReaderConfig, ReaderMode, ReaderStateReader, UpdateState,
    WindowIdentifier,
};
use serde::{Deserialize, Serialize};

/// Root of the main-process state tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RootState {
    pub app: AppState,
    pub net: NetState,
    pub reader: ReaderState,
    pub i18n: I18nState,
    pub update: UpdateState,
}

/// Application bootstrap state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppState {
    /// Set once the main process has finished initialization.
    pub initialized: bool,
}

/// Network slice.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetState {
    pub status: NetStatus,
}

/// Reader slice: open readers, shared preferences and the current mode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReaderState {
    /// Open readers keyed by the window hosting them.
    pub readers: BTreeMap<WindowIdentifier, ReaderStateReader>,
    pub config: ReaderConfig,
    pub mode: ReaderMode,
}

impl ReaderState {
    /// Get the reader hosted by `window`, if any.
    pub fn reader_for(&self, window: &WindowIdentifier) -> Option<&ReaderStateReader> {
        self.readers.get(window)
    }
}

/// Localization slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18nState {
    pub locale: String,
}

impl Default for I18nState {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}
