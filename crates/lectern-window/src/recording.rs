//! In-memory window handle.
//!
//! Records every envelope it receives and every close request. Used by
//! tests and by headless sessions that have no native windowing layer.

use std::sync::{Arc, Mutex, MutexGuard};

use lectern_sync::Envelope;

use crate::error::DeliveryError;
use crate::window::WindowHandle;

#[derive(Debug)]
struct Recorded {
    visible: bool,
    gone: bool,
    close_requests: usize,
    sent: Vec<Envelope>,
}

/// Window handle that records traffic instead of talking to a renderer.
#[derive(Debug)]
pub struct RecordingWindow {
    inner: Mutex<Recorded>,
}

impl Default for RecordingWindow {
    fn default() -> Self {
        Self {
            inner: Mutex::new(Recorded {
                visible: true,
                gone: false,
                close_requests: 0,
                sent: Vec::new(),
            }),
        }
    }
}

impl RecordingWindow {
    /// Create a visible window handle behind an `Arc`.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn lock(&self) -> MutexGuard<'_, Recorded> {
        // A poisoned lock only means another test thread panicked
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_visible(&self, visible: bool) {
        self.lock().visible = visible;
    }

    /// Simulate the native window disappearing; later sends fail.
    pub fn disconnect(&self) {
        self.lock().gone = true;
    }

    /// Number of times `close()` was called.
    pub fn close_requests(&self) -> usize {
        self.lock().close_requests
    }

    pub fn is_closed(&self) -> bool {
        self.close_requests() > 0
    }

    /// Envelopes delivered so far.
    pub fn sent(&self) -> Vec<Envelope> {
        self.lock().sent.clone()
    }

    /// Remove and return delivered envelopes.
    pub fn take_sent(&self) -> Vec<Envelope> {
        std::mem::take(&mut self.lock().sent)
    }
}

impl WindowHandle for RecordingWindow {
    fn close(&self) {
        let mut inner = self.lock();
        inner.close_requests += 1;
        inner.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.lock().visible
    }

    fn send(&self, envelope: &Envelope) -> Result<(), DeliveryError> {
        let mut inner = self.lock();
        if inner.gone {
            return Err(DeliveryError::WindowGone);
        }
        inner.sent.push(envelope.clone());
        Ok(())
    }
}
