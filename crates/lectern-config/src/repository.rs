//! Key/value config repositories.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::future::Future;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::document::ConfigDocument;
use crate::error::{ConfigError, Result};

/// Asynchronous store of [`ConfigDocument`]s keyed by identifier.
pub trait ConfigRepository {
    /// Fetch the document stored under `key`.
    ///
    /// A missing key is [`ConfigError::NotFound`].
    fn get(&self, key: &str) -> impl Future<Output = Result<ConfigDocument>> + Send;

    /// Store a document under its identifier, returning what was written.
    ///
    /// An existing document keeps its creation time.
    fn save(&self, document: ConfigDocument) -> impl Future<Output = Result<ConfigDocument>> + Send;
}

/// Check that a key can be used as a file name on every platform.
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key.len() <= 128
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidKey {
            key: key.to_string(),
        })
    }
}

// =============================================================================
// FILE REPOSITORY
// =============================================================================

/// One JSON file per key in a directory.
///
/// Writes go through a temp file and a rename. File I/O runs on the
/// blocking thread pool.
#[derive(Debug, Clone)]
pub struct FileConfigRepository {
    dir: PathBuf,
}

impl FileConfigRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl ConfigRepository for FileConfigRepository {
    async fn get(&self, key: &str) -> Result<ConfigDocument> {
        let path = self.path_for(key)?;
        let key = key.to_string();
        run_blocking(move || read_document(&path, &key)).await
    }

    async fn save(&self, document: ConfigDocument) -> Result<ConfigDocument> {
        let path = self.path_for(&document.identifier)?;
        run_blocking(move || {
            let mut document = document;
            match read_document(&path, &document.identifier) {
                Ok(existing) => document.created_at = existing.created_at,
                Err(error) if error.is_not_found() => {}
                Err(error) => {
                    tracing::debug!(%error, "Overwriting unreadable config document");
                }
            }
            document.touch();
            write_document(&path, &document)?;
            tracing::debug!(key = %document.identifier, path = %path.display(), "Saved config document");
            Ok(document)
        })
        .await
    }
}

async fn run_blocking<T, F>(task: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|source| ConfigError::Task { source })?
}

fn read_document(path: &Path, key: &str) -> Result<ConfigDocument> {
    let bytes = fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound {
                key: key.to_string(),
            }
        } else {
            ConfigError::Io {
                operation: "read",
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ConfigError::Serialization {
        key: key.to_string(),
        source,
    })
}

fn write_document(path: &Path, document: &ConfigDocument) -> Result<()> {
    let bytes =
        serde_json::to_vec_pretty(document).map_err(|source| ConfigError::Serialization {
            key: document.identifier.clone(),
            source,
        })?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            operation: "create directory for",
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = File::create(&temp_path).map_err(|source| ConfigError::Io {
        operation: "create",
        path: temp_path.clone(),
        source,
    })?;
    file.write_all(&bytes).map_err(|source| ConfigError::Io {
        operation: "write",
        path: temp_path.clone(),
        source,
    })?;
    file.sync_all().map_err(|source| ConfigError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source,
    })?;

    fs::rename(&temp_path, path).map_err(|source| ConfigError::Io {
        operation: "replace",
        path: path.to_path_buf(),
        source,
    })
}

// =============================================================================
// MEMORY REPOSITORY
// =============================================================================

/// Repository kept in memory, for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryConfigRepository {
    documents: Mutex<BTreeMap<String, ConfigDocument>>,
}

impl MemoryConfigRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with `document`.
    pub fn with_document(document: ConfigDocument) -> Self {
        let repository = Self::new();
        repository
            .lock()
            .insert(document.identifier.clone(), document);
        repository
    }

    /// Stored keys, in order.
    pub fn keys(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, ConfigDocument>> {
        self.documents.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ConfigRepository for MemoryConfigRepository {
    async fn get(&self, key: &str) -> Result<ConfigDocument> {
        validate_key(key)?;
        self.lock()
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigError::NotFound {
                key: key.to_string(),
            })
    }

    async fn save(&self, document: ConfigDocument) -> Result<ConfigDocument> {
        validate_key(&document.identifier)?;
        let mut documents = self.lock();
        let mut document = document;
        if let Some(existing) = documents.get(&document.identifier) {
            document.created_at = existing.created_at;
        }
        document.touch();
        documents.insert(document.identifier.clone(), document.clone());
        Ok(document)
    }
}
