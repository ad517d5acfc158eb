//! Renderer-side reducer.
//!
//! Mirrors what a renderer process holds after receiving envelopes. Used by
//! headless sessions and tests to check that replays converge.

use lectern_model::{
    DEFAULT_LOCALE, NetStatus, ReaderConfig, ReaderMode, ReaderStateReader, UpdateState,
    WindowIdentifier,
};
use lectern_store::Action;

use crate::envelope::{Envelope, SyncEvent, WinEvent};

/// State held by one renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererState {
    pub win_id: Option<WindowIdentifier>,
    pub net: NetStatus,
    pub reader: Option<ReaderStateReader>,
    pub config: ReaderConfig,
    pub mode: ReaderMode,
    pub locale: String,
    pub update: UpdateState,
}

impl Default for RendererState {
    fn default() -> Self {
        Self {
            win_id: None,
            net: NetStatus::Unknown,
            reader: None,
            config: ReaderConfig::default(),
            mode: ReaderMode::default(),
            locale: DEFAULT_LOCALE.to_string(),
            update: UpdateState::default(),
        }
    }
}

/// Applies envelopes the way a renderer does.
#[derive(Debug, Clone, Default)]
pub struct RendererMirror {
    state: RendererState,
}

impl RendererMirror {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RendererState {
        &self.state
    }

    /// Apply every envelope in order.
    pub fn apply_all<'a>(&mut self, envelopes: impl IntoIterator<Item = &'a Envelope>) {
        for envelope in envelopes {
            self.apply(envelope);
        }
    }

    /// Apply one envelope.
    pub fn apply(&mut self, envelope: &Envelope) {
        match envelope {
            Envelope::Win(WinEvent::IdResponse { win_id }) => self.state.win_id = Some(*win_id),
            Envelope::Sync(SyncEvent::MainAction { action }) => self.apply_action(action),
        }
    }

    fn apply_action(&mut self, action: &Action) {
        let state = &mut self.state;
        match action {
            Action::AppInit => {}
            Action::NetOnline => state.net = NetStatus::Online,
            Action::NetOffline => state.net = NetStatus::Offline,
            Action::NetUnknown => state.net = NetStatus::Unknown,
            Action::ReaderOpenSuccess { reader: None } => state.reader = None,
            Action::ReaderOpenSuccess {
                reader: Some(reader),
            } => {
                // Broadcasts carry readers of other windows too
                if state.win_id.is_none_or(|id| id == reader.window_identifier) {
                    state.reader = Some(reader.clone());
                }
            }
            Action::ReaderCloseSuccess { window_identifier } => {
                if state
                    .reader
                    .as_ref()
                    .is_some_and(|r| r.window_identifier == *window_identifier)
                {
                    state.reader = None;
                }
            }
            Action::ReaderConfigSetSuccess { config } => state.config = config.clone(),
            Action::ReaderModeSetSuccess { mode } => state.mode = *mode,
            Action::I18nSet { locale } => state.locale.clone_from(locale),
            Action::UpdateLatestVersionSet {
                status,
                latest_version,
                latest_version_url,
            } => {
                state.update = UpdateState {
                    status: *status,
                    latest_version: latest_version.clone(),
                    latest_version_url: latest_version_url.clone(),
                };
            }
        }
    }
}
