//! Language registry
//!
//! The ordered catalog of languages the blog is published in. The first
//! entry doubles as the fallback when the nominal default is missing.

use lazy_static::lazy_static;
use serde::Serialize;

/// Code of the language used when no explicit signal is available
pub const DEFAULT_LANGUAGE: &str = "en";

/// A supported language and its locale metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Language {
    /// ISO 639-1 code, also used as the URL path prefix (e.g. "es")
    pub code: &'static str,
    /// Native display name
    pub display_name: &'static str,
    /// Flag glyph shown in the language picker
    pub flag: &'static str,
    /// BCP-47 locale used for `<html lang>`
    pub locale: &'static str,
    /// Open Graph locale (underscore form)
    pub og_locale: &'static str,
}

lazy_static! {
    static ref LANGUAGES: Vec<Language> = vec![
        Language {
            code: "en",
            display_name: "English",
            flag: "🇺🇸",
            locale: "en-GB",
            og_locale: "en_GB",
        },
        Language {
            code: "es",
            display_name: "Español",
            flag: "🇪🇸",
            locale: "es-ES",
            og_locale: "es_ES",
        },
    ];
}

/// All supported languages, in registry order
pub fn languages() -> &'static [Language] {
    &LANGUAGES
}

/// Look up a language by its code
pub fn language_by_code(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|lang| lang.code == code)
}

/// Whether `code` names a registry language
pub fn is_supported(code: &str) -> bool {
    language_by_code(code).is_some()
}

/// The default language, or the first registry entry if the default code
/// is not registered
pub fn default_language() -> &'static Language {
    language_by_code(DEFAULT_LANGUAGE).unwrap_or(&LANGUAGES[0])
}

/// Code of the default language as actually present in the registry
pub fn default_code() -> &'static str {
    default_language().code
}
