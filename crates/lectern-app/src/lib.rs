//! Lectern main-process core.
//!
//! Wires the store, window manager, config repository and platform services
//! together:
//!
//! - [`init`]: startup sequence and main-loop event handling
//! - [`session`]: headless session over JSON lines
//! - [`platform`]: OS locale and application identity
//! - [`logging`]: tracing subscriber setup

pub mod init;
pub mod logging;
pub mod platform;
pub mod session;
