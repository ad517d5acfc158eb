//! Shared domain types for Lectern.
//!
//! These types are used by the main-process store, the window registry and
//! the renderer synchronization protocol. They carry no behavior beyond
//! construction, display and serialization so that every crate in the
//! workspace agrees on one wire representation.
//!
//! # Module Structure
//!
//! - `window` - Window identifiers and window kinds
//! - `reader` - Reader mode, per-window reader records and reading preferences
//! - `net` - Network status
//! - `update` - Application update status
//! - `i18n` - Supported languages and the default locale

pub mod i18n;
pub mod net;
pub mod reader;
pub mod update;
pub mod window;

pub use i18n::{AVAILABLE_LANGUAGES, DEFAULT_LOCALE, is_available_language, language_name};
pub use net::NetStatus;
pub use reader::{ReaderConfig, ReaderMode, ReaderStateReader};
pub use update::{UpdateState, UpdateStatus};
pub use window::{AppWindowType, WindowIdentifier};
