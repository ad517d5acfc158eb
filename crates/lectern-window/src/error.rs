//! Registry and delivery error types.

use lectern_model::WindowIdentifier;
use thiserror::Error;

/// Window registry contract violations.
///
/// Correct callers never trigger these; the manager logs them and carries on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A window with this identifier is already registered.
    #[error("window {0} is already registered")]
    DuplicateIdentifier(WindowIdentifier),

    /// No window with this identifier is registered.
    #[error("window {0} is not registered")]
    NotFound(WindowIdentifier),
}

/// Failure to hand an envelope to a renderer.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The native window closed before the send.
    #[error("window is gone")]
    WindowGone,

    /// The envelope could not be serialized.
    #[error("failed to serialize envelope")]
    Serialization(#[from] serde_json::Error),

    /// The transport refused the message.
    #[error("channel refused message: {0}")]
    Channel(String),
}
