//! Close-time lifecycle policy.
//!
//! The library window anchors the session. Given the kind of window that
//! just closed and the windows still open (the closed one already removed),
//! [`decide`] picks one of three outcomes, evaluated in order:
//!
//! 1. The library closed and anything remains: close everything.
//! 2. Exactly one window remains and it is the library: the reader rejoins
//!    it (mode becomes attached). If that library is hidden, nothing
//!    user-facing is left, so it closes too.
//! 3. Otherwise nothing happens.
//!
//! The policy is pure. [`WindowManager`](crate::WindowManager) applies the
//! effects and re-runs the policy for every window the cascade closes.

use lectern_model::{AppWindowType, ReaderMode, WindowIdentifier};

/// What the policy knows about an open window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSnapshot {
    pub identifier: WindowIdentifier,
    pub kind: AppWindowType,
    pub visible: bool,
}

/// Outcome of one close event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleDecision {
    /// Close every listed window.
    CascadeClose(Vec<WindowIdentifier>),
    /// Switch the reader back to attached mode.
    ReattachReader {
        /// Set when the remaining library window is hidden.
        close_hidden_library: Option<WindowIdentifier>,
    },
    NoOp,
}

/// Side effect requested by a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEffect {
    SetReaderMode(ReaderMode),
    Close(WindowIdentifier),
}

impl LifecycleDecision {
    /// Effects to apply, in order.
    pub fn effects(&self) -> Vec<LifecycleEffect> {
        match self {
            Self::CascadeClose(ids) => ids.iter().copied().map(LifecycleEffect::Close).collect(),
            Self::ReattachReader {
                close_hidden_library,
            } => std::iter::once(LifecycleEffect::SetReaderMode(ReaderMode::Attached))
                .chain(close_hidden_library.map(LifecycleEffect::Close))
                .collect(),
            Self::NoOp => Vec::new(),
        }
    }
}

/// Decide what to do after a window of kind `closed` went away.
///
/// `remaining` must already exclude the closed window.
pub fn decide(closed: AppWindowType, remaining: &[WindowSnapshot]) -> LifecycleDecision {
    if !remaining.is_empty() && closed == AppWindowType::Library {
        return LifecycleDecision::CascadeClose(remaining.iter().map(|w| w.identifier).collect());
    }

    match remaining {
        [last] if last.kind == AppWindowType::Library => LifecycleDecision::ReattachReader {
            close_hidden_library: (!last.visible).then_some(last.identifier),
        },
        _ => LifecycleDecision::NoOp,
    }
}
