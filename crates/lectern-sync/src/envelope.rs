//! Envelopes delivered over the main-to-renderer channels.

use std::fmt;

use lectern_model::WindowIdentifier;
use lectern_store::Action;
use serde::{Deserialize, Serialize};

/// Logical channel an envelope travels on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Window identity events.
    Win,
    /// State-action relay.
    Sync,
}

impl Channel {
    /// Channel name as used by the windowing layer.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Sync => "sync",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Events on the window-identity channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum WinEvent {
    /// Tells a renderer which window it is.
    IdResponse {
        #[serde(rename = "winId")]
        win_id: WindowIdentifier,
    },
}

/// Events on the state-action channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum SyncEvent {
    /// An action applied by the main process, to be mirrored.
    MainAction { action: Action },
}

/// Anything the main process sends to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Envelope {
    Win(WinEvent),
    Sync(SyncEvent),
}

impl Envelope {
    /// Wrap a store action for relay.
    pub fn main_action(action: Action) -> Self {
        Self::Sync(SyncEvent::MainAction { action })
    }

    /// Identity envelope for `window`.
    pub fn identity(window: WindowIdentifier) -> Self {
        Self::Win(WinEvent::IdResponse { win_id: window })
    }

    /// Channel this envelope must be sent on.
    pub fn channel(&self) -> Channel {
        match self {
            Self::Win(_) => Channel::Win,
            Self::Sync(_) => Channel::Sync,
        }
    }

    /// Serialize to the JSON body handed to the windowing layer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
