//! Window lifecycle for the Lectern main process.
//!
//! This crate tracks open windows, decides what happens when one closes and
//! keeps every renderer in step with the main-process store.
//!
//! # Ordering
//!
//! - On open, the window is registered before any hook (and so before any
//!   sync envelope) runs.
//! - On close, the window is unregistered before any hook runs, so the
//!   lifecycle policy sees only the windows that remain.
//! - Cascade closes are processed as a worklist; every entry was removed
//!   from the registry first, which bounds the work by the number of open
//!   windows.
//!
//! # Example
//!
//! ```
//! use lectern_store::Store;
//! use lectern_window::{AppWindow, RecordingWindow, WindowManager, hooks};
//!
//! let mut manager = WindowManager::new(Store::default());
//! manager.on_open(hooks::sync_on_open);
//! manager.on_close(hooks::lifecycle_on_close);
//!
//! let library = RecordingWindow::shared();
//! let reader = RecordingWindow::shared();
//! let library_window = AppWindow::library(library.clone());
//! manager.window_opened(library_window.clone()).unwrap();
//! manager.window_opened(AppWindow::reader(reader.clone())).unwrap();
//!
//! // Closing the library takes the reader with it
//! manager.window_closed(library_window.identifier()).unwrap();
//! assert!(manager.registry().is_empty());
//! assert!(reader.is_closed());
//! ```

mod error;
pub mod hooks;
mod lifecycle;
mod manager;
mod recording;
mod registry;
mod window;

pub use error::{DeliveryError, RegistryError};
pub use lifecycle::{LifecycleDecision, LifecycleEffect, WindowSnapshot, decide};
pub use manager::{HookContext, WindowHook, WindowManager};
pub use recording::RecordingWindow;
pub use registry::WindowRegistry;
pub use window::{AppWindow, WindowHandle};
