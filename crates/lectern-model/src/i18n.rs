//! Supported interface languages.

/// Locale used when neither the stored configuration nor the operating
/// system yields a supported language.
pub const DEFAULT_LOCALE: &str = "en";

/// Languages the interface is translated into, as `(code, native name)`.
pub const AVAILABLE_LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("fr", "Français"),
    ("de", "Deutsch"),
    ("es", "Español"),
    ("it", "Italiano"),
    ("nl", "Nederlands"),
    ("pt", "Português"),
    ("fi", "Suomi"),
    ("sv", "Svenska"),
    ("lt", "Lietuvių"),
    ("ru", "Русский"),
    ("ja", "日本語"),
    ("ko", "한국어"),
    ("zh", "中文"),
];

/// Check if `code` is one of [`AVAILABLE_LANGUAGES`].
pub fn is_available_language(code: &str) -> bool {
    AVAILABLE_LANGUAGES.iter().any(|(c, _)| *c == code)
}

/// Get the native display name of a supported language.
pub fn language_name(code: &str) -> Option<&'static str> {
    AVAILABLE_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}
