//! Built-in lifecycle hooks.
//!
//! Register them on a [`WindowManager`](crate::WindowManager) with
//! `on_open` / `on_close`; they are plain functions so registration order
//! stays explicit at the call site.

use lectern_model::AppWindowType;
use lectern_store::Action;
use lectern_sync::replay_sequence;

use crate::lifecycle::{LifecycleEffect, decide};
use crate::manager::HookContext;
use crate::window::AppWindow;

/// Replay the authoritative state into a newly opened window.
///
/// Sends the identity envelope first, then one envelope per state slice.
/// A failed send is logged and the remaining envelopes are still attempted.
pub fn sync_on_open(ctx: &mut HookContext<'_>, window: &AppWindow) {
    let state = ctx.state();
    let mut delivered = 0;
    for message in replay_sequence(&state, window.identifier()) {
        tracing::debug!(window = %window.identifier(), message = message.label(), "sync");
        if window.deliver(&message.to_envelope()) {
            delivered += 1;
        }
    }
    tracing::debug!(window = %window.identifier(), delivered, "Replayed state to window");
}

/// Apply the lifecycle policy after a window closed.
pub fn lifecycle_on_close(ctx: &mut HookContext<'_>, closed: &AppWindow) {
    let decision = decide(closed.kind(), &ctx.registry().snapshots());
    tracing::debug!(window = %closed.identifier(), ?decision, "Lifecycle decision");

    for effect in decision.effects() {
        match effect {
            LifecycleEffect::SetReaderMode(mode) => {
                ctx.dispatch(Action::ReaderModeSetSuccess { mode });
            }
            LifecycleEffect::Close(id) => ctx.request_close(id),
        }
    }
}

/// Drop the reader record of a closed reader window.
pub fn release_reader_on_close(ctx: &mut HookContext<'_>, closed: &AppWindow) {
    if closed.kind() != AppWindowType::Reader {
        return;
    }
    let window_identifier = closed.identifier();
    if ctx.state().reader.readers.contains_key(&window_identifier) {
        ctx.dispatch(Action::ReaderCloseSuccess { window_identifier });
    }
}
