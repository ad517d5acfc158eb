//! Storage root providers.

use std::path::{Path, PathBuf};

/// Supplies the directory that `store://` references are resolved against.
pub trait StorageRootProvider {
    fn root_path(&self) -> &Path;
}

/// On-disk publication storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationStorage {
    root: PathBuf,
}

impl PublicationStorage {
    /// Storage rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl StorageRootProvider for PublicationStorage {
    fn root_path(&self) -> &Path {
        &self.root
    }
}

impl<P: StorageRootProvider + ?Sized> StorageRootProvider for &P {
    fn root_path(&self) -> &Path {
        (**self).root_path()
    }
}
