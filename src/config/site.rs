//! Site configuration (_config.yml)

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::collections::{CollectionMap, ConfigError};
use crate::i18n::{registry, translation, TranslationKey, DEFAULT_LANGUAGE};

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub author: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub lang: String,
    pub og_locale: String,
    pub share_message: String,

    // Pagination
    pub pagination_size: usize,

    // Languages
    pub default_language: String,

    // Content
    pub content_dir: String,
    pub shared_collection: String,
    /// Language code -> dedicated collection; empty means `<shared>_<code>`
    pub collections: IndexMap<String, String>,

    // Visitor state
    pub preferences_file: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            author: "John Doe".to_string(),
            title: "Blog".to_string(),
            description: String::new(),
            url: "http://example.com".to_string(),
            lang: "en-GB".to_string(),
            og_locale: "en_GB".to_string(),
            share_message: "Share this post".to_string(),

            pagination_size: 6,

            default_language: DEFAULT_LANGUAGE.to_string(),

            content_dir: "src/content".to_string(),
            shared_collection: "blog".to_string(),
            collections: IndexMap::new(),

            preferences_file: ".polyblog/preferences.json".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;

        if config.default_language != registry::default_code() {
            tracing::warn!(
                "default_language `{}` is not configurable, using `{}`",
                config.default_language,
                registry::default_code()
            );
        }

        Ok(config)
    }

    /// Per-language collections, validated against the registry
    pub fn collection_map(&self) -> Result<CollectionMap, ConfigError> {
        if self.collections.is_empty() {
            Ok(CollectionMap::conventional(&self.shared_collection))
        } else {
            CollectionMap::from_config(&self.collections, &self.shared_collection)
        }
    }

    /// Configuration as seen by visitors of one language
    ///
    /// Unknown codes get the base configuration unchanged.
    pub fn localized(&self, code: &str) -> SiteConfig {
        let Some(language) = registry::language_by_code(code) else {
            return self.clone();
        };

        SiteConfig {
            lang: language.locale.to_string(),
            og_locale: language.og_locale.to_string(),
            share_message: translation(code, TranslationKey::ShareMessage).to_string(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_partial_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("_config.yml");
        fs::write(
            &path,
            "title: Wayne Goosen | Blog\npagination_size: 4\ncollections:\n  es: posts_es\n",
        )
        .unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.title, "Wayne Goosen | Blog");
        assert_eq!(config.pagination_size, 4);
        assert_eq!(config.shared_collection, "blog");

        let map = config.collection_map().unwrap();
        assert_eq!(map.collection_for("es"), Some("posts_es"));
    }

    #[test]
    fn test_default_collection_map() {
        let config = SiteConfig::default();
        let map = config.collection_map().unwrap();
        assert_eq!(map.collection_for("es"), Some("blog_es"));
    }

    #[test]
    fn test_invalid_collection_map() {
        let mut config = SiteConfig::default();
        config.collections.insert("xx".to_string(), "blog_xx".to_string());
        assert!(config.collection_map().is_err());
    }

    #[test]
    fn test_localized() {
        let config = SiteConfig::default();

        let es = config.localized("es");
        assert_eq!(es.lang, "es-ES");
        assert_eq!(es.og_locale, "es_ES");
        assert_eq!(es.share_message, "Compartir este post");
        assert_eq!(es.pagination_size, config.pagination_size);

        let unknown = config.localized("fr");
        assert_eq!(unknown.lang, "en-GB");
        assert_eq!(unknown.share_message, "Share this post");
    }
}
