//! Main-to-renderer state synchronization.
//!
//! A renderer process has no access to the main-process store. When a
//! window opens, the main process replays the authoritative state into it as
//! a fixed sequence of [`SyncMessage`]s, each setting exactly one state
//! slice. Later changes are relayed as the same `MainAction` envelopes.
//!
//! # Wire format
//!
//! Two logical channels carry envelopes:
//!
//! ```text
//! win  : {"type": "IdResponse", "payload": {"winId": "<uuid>"}}
//! sync : {"type": "MainAction", "payload": {"action": {"type": "...", "payload": ...}}}
//! ```
//!
//! # Module Structure
//!
//! - `envelope` - Channel names and envelope shapes
//! - `message` - The closed set of replay messages
//! - `replay` - The open-window replay sequence
//! - `mirror` - Renderer-side reducer applying envelopes

mod envelope;
mod message;
mod mirror;
mod replay;

pub use envelope::{Channel, Envelope, SyncEvent, WinEvent};
pub use message::SyncMessage;
pub use mirror::{RendererMirror, RendererState};
pub use replay::{REPLAY_LEN, replay_sequence};
