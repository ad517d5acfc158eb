//! Replay messages.

use lectern_model::{
    NetStatus, ReaderConfig, ReaderMode, ReaderStateReader, UpdateState, WindowIdentifier,
};
use lectern_store::Action;

use crate::envelope::Envelope;

/// One unit of the open-window replay; sets exactly one renderer slice.
///
/// Every variant is self-contained, so delivering it twice leaves the
/// renderer in the same state as delivering it once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncMessage {
    Identity(WindowIdentifier),
    NetStatus(NetStatus),
    /// Reader hosted by the target window; `None` when it hosts none.
    ReaderOpened(Option<ReaderStateReader>),
    ReaderConfig(ReaderConfig),
    ReaderMode(ReaderMode),
    LocaleSet(String),
    UpdateStatus(UpdateState),
}

impl SyncMessage {
    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Identity(_) => "identity",
            Self::NetStatus(_) => "net-status",
            Self::ReaderOpened(_) => "reader-opened",
            Self::ReaderConfig(_) => "reader-config",
            Self::ReaderMode(_) => "reader-mode",
            Self::LocaleSet(_) => "locale",
            Self::UpdateStatus(_) => "update-status",
        }
    }

    /// The store action a renderer applies for this message.
    ///
    /// `Identity` is not an action; it travels on the window channel.
    pub fn to_action(&self) -> Option<Action> {
        self.route().ok()
    }

    /// Build the envelope delivered to the renderer.
    pub fn to_envelope(&self) -> Envelope {
        match self.route() {
            Ok(action) => Envelope::main_action(action),
            Err(window) => Envelope::identity(window),
        }
    }

    fn route(&self) -> Result<Action, WindowIdentifier> {
        let action = match self {
            Self::Identity(window) => return Err(*window),
            Self::NetStatus(status) => Action::for_net_status(*status),
            Self::ReaderOpened(reader) => Action::ReaderOpenSuccess {
                reader: reader.clone(),
            },
            Self::ReaderConfig(config) => Action::ReaderConfigSetSuccess {
                config: config.clone(),
            },
            Self::ReaderMode(mode) => Action::ReaderModeSetSuccess { mode: *mode },
            Self::LocaleSet(locale) => Action::I18nSet {
                locale: locale.clone(),
            },
            Self::UpdateStatus(update) => Action::UpdateLatestVersionSet {
                status: update.status,
                latest_version: update.latest_version.clone(),
                latest_version_url: update.latest_version_url.clone(),
            },
        };
        Ok(action)
    }
}
