//! Registry of open windows.

use std::collections::BTreeMap;

use lectern_model::{AppWindowType, WindowIdentifier};

use crate::error::RegistryError;
use crate::lifecycle::WindowSnapshot;
use crate::window::AppWindow;

/// Set of currently open windows keyed by identifier.
///
/// Every key corresponds to a window that has not been closed yet. Keys are
/// ordered, so iteration (and therefore cascade order) is deterministic.
#[derive(Debug, Clone, Default)]
pub struct WindowRegistry {
    windows: BTreeMap<WindowIdentifier, AppWindow>,
}

impl WindowRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a newly opened window.
    pub fn register(&mut self, window: AppWindow) -> Result<(), RegistryError> {
        let id = window.identifier();
        if self.windows.contains_key(&id) {
            return Err(RegistryError::DuplicateIdentifier(id));
        }
        self.windows.insert(id, window);
        Ok(())
    }

    /// Stop tracking a window, returning it.
    pub fn unregister(&mut self, id: &WindowIdentifier) -> Result<AppWindow, RegistryError> {
        self.windows
            .remove(id)
            .ok_or(RegistryError::NotFound(*id))
    }

    /// Read-only view of the open windows.
    pub fn windows(&self) -> &BTreeMap<WindowIdentifier, AppWindow> {
        &self.windows
    }

    pub fn get(&self, id: &WindowIdentifier) -> Option<&AppWindow> {
        self.windows.get(id)
    }

    pub fn contains(&self, id: &WindowIdentifier) -> bool {
        self.windows.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AppWindow> + '_ {
        self.windows.values()
    }

    /// Get the first open window of `kind`.
    pub fn find_kind(&self, kind: AppWindowType) -> Option<&AppWindow> {
        self.iter().find(|w| w.kind() == kind)
    }

    /// Capture identifier, kind and current visibility of every window.
    pub fn snapshots(&self) -> Vec<WindowSnapshot> {
        self.iter()
            .map(|w| WindowSnapshot {
                identifier: w.identifier(),
                kind: w.kind(),
                visible: w.handle().is_visible(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingWindow;

    #[test]
    fn test_register_and_unregister() {
        let mut registry = WindowRegistry::new();
        let window = AppWindow::library(RecordingWindow::shared());
        let id = window.identifier();

        registry.register(window).unwrap();
        assert!(registry.contains(&id));
        assert_eq!(registry.len(), 1);

        let removed = registry.unregister(&id).unwrap();
        assert_eq!(removed.identifier(), id);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_duplicate_identifier_is_rejected() {
        let mut registry = WindowRegistry::new();
        let window = AppWindow::reader(RecordingWindow::shared());
        let id = window.identifier();

        registry.register(window.clone()).unwrap();
        assert_eq!(
            registry.register(window),
            Err(RegistryError::DuplicateIdentifier(id))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister_missing_fails_consistently() {
        let mut registry = WindowRegistry::new();
        let id = WindowIdentifier::new();
        assert_eq!(registry.unregister(&id).unwrap_err(), RegistryError::NotFound(id));
        assert_eq!(registry.unregister(&id).unwrap_err(), RegistryError::NotFound(id));
    }

    #[test]
    fn test_snapshots_capture_visibility() {
        let mut registry = WindowRegistry::new();
        let handle = RecordingWindow::shared();
        handle.set_visible(false);
        let window = AppWindow::library(handle);
        let id = window.identifier();
        registry.register(window).unwrap();

        let snapshots = registry.snapshots();
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].identifier, id);
        assert!(!snapshots[0].visible);
        assert_eq!(
            registry.find_kind(AppWindowType::Library).map(AppWindow::identifier),
            Some(id)
        );
    }
}
