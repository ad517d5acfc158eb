//! Open-window replay sequence.

use lectern_model::WindowIdentifier;
use lectern_store::RootState;

use crate::message::SyncMessage;

/// Number of messages in a replay.
pub const REPLAY_LEN: usize = 7;

/// Build the messages that bring `window`'s renderer to parity with `state`.
///
/// `Identity` always comes first; the remaining messages each set a
/// disjoint slice. A window that hosts no reader still receives a
/// `ReaderOpened(None)` so the renderer initializes every slice.
pub fn replay_sequence(state: &RootState, window: WindowIdentifier) -> [SyncMessage; REPLAY_LEN] {
    [
        SyncMessage::Identity(window),
        SyncMessage::NetStatus(state.net.status),
        SyncMessage::ReaderOpened(state.reader.reader_for(&window).cloned()),
        SyncMessage::ReaderConfig(state.reader.config.clone()),
        SyncMessage::ReaderMode(state.reader.mode),
        SyncMessage::LocaleSet(state.i18n.locale.clone()),
        SyncMessage::UpdateStatus(state.update.clone()),
    ]
}
