//! Application windows and the native-window capability they wrap.

use std::fmt;
use std::sync::Arc;

use lectern_model::{AppWindowType, WindowIdentifier};
use lectern_sync::Envelope;

use crate::error::DeliveryError;

/// What the core needs from a native window.
pub trait WindowHandle: Send + Sync {
    /// Ask the windowing layer to close the window.
    ///
    /// The layer reports the closure back through
    /// [`WindowManager::window_closed`](crate::WindowManager::window_closed).
    fn close(&self);

    /// Check if the window is currently shown.
    fn is_visible(&self) -> bool;

    /// Deliver an envelope to the window's renderer on `envelope.channel()`.
    fn send(&self, envelope: &Envelope) -> Result<(), DeliveryError>;
}

/// A window tracked by the registry.
#[derive(Clone)]
pub struct AppWindow {
    identifier: WindowIdentifier,
    kind: AppWindowType,
    handle: Arc<dyn WindowHandle>,
}

impl AppWindow {
    pub fn new(
        identifier: WindowIdentifier,
        kind: AppWindowType,
        handle: Arc<dyn WindowHandle>,
    ) -> Self {
        Self {
            identifier,
            kind,
            handle,
        }
    }

    /// Create a library window with a fresh identifier.
    pub fn library(handle: Arc<dyn WindowHandle>) -> Self {
        Self::new(WindowIdentifier::new(), AppWindowType::Library, handle)
    }

    /// Create a reader window with a fresh identifier.
    pub fn reader(handle: Arc<dyn WindowHandle>) -> Self {
        Self::new(WindowIdentifier::new(), AppWindowType::Reader, handle)
    }

    pub fn identifier(&self) -> WindowIdentifier {
        self.identifier
    }

    pub fn kind(&self) -> AppWindowType {
        self.kind
    }

    pub fn handle(&self) -> &dyn WindowHandle {
        self.handle.as_ref()
    }

    /// Send an envelope, logging and swallowing delivery failures.
    ///
    /// A window may close between the decision to notify it and the send,
    /// so a failure here is never an error for the caller.
    pub fn deliver(&self, envelope: &Envelope) -> bool {
        match self.handle.send(envelope) {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(
                    window = %self.identifier,
                    channel = %envelope.channel(),
                    %error,
                    "Dropping envelope for unreachable window"
                );
                false
            }
        }
    }
}

impl fmt::Debug for AppWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppWindow")
            .field("identifier", &self.identifier)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
