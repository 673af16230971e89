//! Active language resolution
//!
//! Priority: an explicitly stored preference, then the language the client
//! reports, then the default language. Stored values are only trusted after
//! they are checked against the registry.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use unic_langid::LanguageIdentifier;

use super::registry;

/// Storage key holding the visitor's language choice
pub const PREFERENCE_KEY: &str = "preferredLanguage";

/// Client-side key-value persistence
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Source of the client's natural-language preference
pub trait ClientEnvironment {
    /// Raw language tag, e.g. "en-US"
    fn preferred_language(&self) -> Option<String>;
}

/// Preferences held in memory for the lifetime of a session
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences persisted as a flat JSON object on disk
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
    values: HashMap<String, String>,
}

#[derive(Serialize, Deserialize, Default)]
struct PreferenceFile {
    #[serde(flatten)]
    values: HashMap<String, String>,
}

impl FilePreferences {
    /// Open the preference file, starting empty if it is missing or unreadable
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<PreferenceFile>(&content) {
                Ok(file) => file.values,
                Err(e) => {
                    tracing::warn!("Ignoring unreadable preferences {:?}: {}", path, e);
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                tracing::warn!("Failed to read preferences {:?}: {}", path, e);
                HashMap::new()
            }
        };

        Self { path, values }
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = PreferenceFile {
            values: self.values.clone(),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&file)?)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}

/// A client that reports a fixed language tag (e.g. from a request header)
#[derive(Debug, Clone)]
pub struct FixedClient(pub String);

impl ClientEnvironment for FixedClient {
    fn preferred_language(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// The operating system's locale
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl ClientEnvironment for SystemLocale {
    fn preferred_language(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// Primary language subtag of a client tag ("en" for "en-US")
pub fn primary_subtag(tag: &str) -> Option<String> {
    let tag = tag.trim();
    if tag.is_empty() {
        return None;
    }

    match tag.parse::<LanguageIdentifier>() {
        Ok(id) => Some(id.language.as_str().to_string()),
        // POSIX locales like "es_ES.UTF-8" are not BCP-47
        Err(_) => tag
            .split(['-', '_', '.'])
            .next()
            .filter(|s| !s.is_empty())
            .map(|s| s.to_ascii_lowercase()),
    }
}

/// Resolves the active language for one session
///
/// Either collaborator may be absent, as when rendering on a server with no
/// visitor session; resolution then ends at the default language.
pub struct LanguageResolver<'a> {
    store: Option<&'a mut dyn PreferenceStore>,
    client: Option<&'a dyn ClientEnvironment>,
}

impl<'a> LanguageResolver<'a> {
    pub fn new(
        store: Option<&'a mut dyn PreferenceStore>,
        client: Option<&'a dyn ClientEnvironment>,
    ) -> Self {
        Self { store, client }
    }

    /// A resolver with no session at all
    pub fn detached() -> Self {
        Self::new(None, None)
    }

    /// Raw stored preference, unvalidated
    pub fn stored_language(&self) -> Option<String> {
        self.store.as_ref().and_then(|s| s.get(PREFERENCE_KEY))
    }

    /// Persist an explicit language choice
    ///
    /// The value is stored as given; readers validate it. Without a store
    /// this is a no-op.
    pub fn set_stored_language(&mut self, code: &str) -> Result<()> {
        match self.store.as_mut() {
            Some(store) => {
                tracing::debug!("Storing language preference: {}", code);
                store.set(PREFERENCE_KEY, code)
            }
            None => Ok(()),
        }
    }

    /// The client's language if supported, else the default
    pub fn browser_language(&self) -> &'static str {
        self.client
            .and_then(|c| c.preferred_language())
            .and_then(|tag| primary_subtag(&tag))
            .and_then(|code| registry::language_by_code(&code))
            .map(|lang| lang.code)
            .unwrap_or_else(registry::default_code)
    }

    /// The active language
    pub fn current_language(&self) -> &'static str {
        if let Some(stored) = self.stored_language() {
            if let Some(lang) = registry::language_by_code(&stored) {
                return lang.code;
            }
            tracing::debug!("Ignoring unsupported stored language: {}", stored);
        }

        self.browser_language()
    }
}
