//! Configuration for Lectern.
//!
//! - [`Settings`]: TOML user settings under the platform config directory
//! - [`ConfigRepository`]: asynchronous JSON document store, with file and
//!   in-memory implementations
//! - [`load_locale`]: startup locale resolution with OS and default fallback
//! - [`AppPaths`]: platform config and data directories

mod document;
mod error;
pub mod locale;
mod paths;
mod repository;
mod settings;

pub use document::ConfigDocument;
pub use error::{ConfigError, LocaleError, Result, SettingsError};
pub use locale::{
    I18N_CONFIG_KEY, LocaleResolution, LocaleSource, fallback_locale, load_locale, stored_locale,
};
pub use paths::AppPaths;
pub use repository::{
    ConfigRepository, FileConfigRepository, MemoryConfigRepository, validate_key,
};
pub use settings::{LoggingSettings, Settings, StorageSettings};
