//! Operating-system services used at startup.

use std::sync::OnceLock;

/// Application identity registered with the OS (taskbar grouping and
/// notifications on Windows).
pub const APP_USER_MODEL_ID: &str = "org.lectern.desktop";

/// Environment variables consulted for the OS locale, highest priority first.
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

pub trait Platform {
    /// The user's locale as reported by the OS, such as `de-DE`.
    fn os_locale(&self) -> Option<String>;

    /// Record the application identity. Only the first call takes effect.
    fn set_app_user_model_id(&self, id: &str);
}

/// Platform backed by the process environment.
#[derive(Debug, Default)]
pub struct SystemPlatform {
    app_user_model_id: OnceLock<String>,
    locale_override: Option<String>,
}

impl SystemPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `locale` instead of reading the environment.
    pub fn with_locale(locale: impl Into<String>) -> Self {
        Self {
            locale_override: Some(locale.into()),
            ..Self::default()
        }
    }

    pub fn app_user_model_id(&self) -> Option<&str> {
        self.app_user_model_id.get().map(String::as_str)
    }
}

impl Platform for SystemPlatform {
    fn os_locale(&self) -> Option<String> {
        if let Some(locale) = &self.locale_override {
            return Some(locale.clone());
        }
        LOCALE_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty() && value != "C" && value != "POSIX")
    }

    fn set_app_user_model_id(&self, id: &str) {
        match self.app_user_model_id.set(id.to_string()) {
            Ok(()) => tracing::info!(id, "Application user model id set"),
            Err(_) => tracing::debug!(id, "Application user model id already set"),
        }
    }
}
