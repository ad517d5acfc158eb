//! Startup locale resolution.
//!
//! The locale stored under [`I18N_CONFIG_KEY`] wins. When nothing usable is
//! stored, the language part of the OS locale is used if Lectern ships that
//! language, otherwise [`DEFAULT_LOCALE`]. A fallback choice is written back
//! so the next start finds it.

use std::fmt;

use lectern_model::{DEFAULT_LOCALE, is_available_language};
use serde_json::{Value, json};

use crate::document::ConfigDocument;
use crate::error::LocaleError;
use crate::repository::ConfigRepository;

/// Config key holding `{"locale": "<code>"}`.
pub const I18N_CONFIG_KEY: &str = "i18n";

/// Where the resolved locale came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
    Stored,
    Os,
    Default,
}

impl fmt::Display for LocaleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stored => "stored",
            Self::Os => "os",
            Self::Default => "default",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleResolution {
    pub locale: String,
    pub source: LocaleSource,
}

/// Language to use when nothing is stored.
///
/// `de-DE`, `de_DE.UTF-8` and `DE` all give `de`.
pub fn fallback_locale(os_locale: Option<&str>) -> LocaleResolution {
    match os_locale.and_then(shipped_language) {
        Some(locale) => LocaleResolution {
            locale,
            source: LocaleSource::Os,
        },
        None => LocaleResolution {
            locale: DEFAULT_LOCALE.to_string(),
            source: LocaleSource::Default,
        },
    }
}

/// Shipped language named by a locale tag, ignoring region and encoding.
fn shipped_language(locale: &str) -> Option<String> {
    locale
        .trim()
        .split(['-', '_', '.'])
        .next()
        .map(str::to_ascii_lowercase)
        .filter(|language| is_available_language(language))
}

/// Extract the locale from a stored `i18n` document.
///
/// A regional tag such as `fr-FR` resolves to its shipped language.
pub fn stored_locale(document: &ConfigDocument) -> Result<String, LocaleError> {
    let locale = document
        .value
        .get("locale")
        .and_then(Value::as_str)
        .ok_or_else(|| LocaleError::Malformed {
            reason: format!("expected {{\"locale\": <string>}}, got {}", document.value),
        })?;

    shipped_language(locale).ok_or_else(|| LocaleError::Malformed {
        reason: format!("unsupported language {locale:?}"),
    })
}

/// Resolve the startup locale.
///
/// Never fails: repository errors and malformed documents fall back to the
/// OS locale. Persisting the fallback is best effort.
pub async fn load_locale<R>(repository: &R, os_locale: Option<&str>) -> LocaleResolution
where
    R: ConfigRepository + Sync,
{
    let stored = match repository.get(I18N_CONFIG_KEY).await {
        Ok(document) => stored_locale(&document),
        Err(error) => Err(LocaleError::from(error)),
    };

    match stored {
        Ok(locale) => {
            tracing::debug!(%locale, "Using stored locale");
            return LocaleResolution {
                locale,
                source: LocaleSource::Stored,
            };
        }
        Err(error) => tracing::debug!(%error, "No usable stored locale"),
    }

    let resolution = fallback_locale(os_locale);
    let document = ConfigDocument::new(I18N_CONFIG_KEY, json!({ "locale": resolution.locale }));
    match repository.save(document).await {
        Ok(_) => tracing::debug!(locale = %resolution.locale, "Created i18n config entry"),
        Err(error) => tracing::warn!(%error, "Failed to persist fallback locale"),
    }
    resolution
}
