//! Internationalization (i18n) support
//!
//! - `registry`: the supported languages and the default language
//! - `translations`: UI strings per language
//! - `resolver`: which language a visitor should see
//! - `path`: language prefixes in URL paths

pub mod path;
pub mod registry;
pub mod resolver;
pub mod translations;

pub use registry::{default_language, language_by_code, languages, Language, DEFAULT_LANGUAGE};
pub use resolver::{
    ClientEnvironment, FilePreferences, FixedClient, LanguageResolver, MemoryPreferences,
    PreferenceStore, SystemLocale,
};
pub use translations::{translation, TranslationKey};
