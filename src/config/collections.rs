//! Language to collection mapping
//!
//! Per-language collections are addressed through this explicit map, which
//! only ever contains registry languages.

use indexmap::IndexMap;
use thiserror::Error;

use crate::i18n::registry;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("collection `{collection}` is mapped to unsupported language `{code}`")]
    UnknownLanguage { code: String, collection: String },

    #[error("collection `{0}` is both the shared collection and a per-language collection")]
    SharedCollectionReused(String),

    #[error("collection name for language `{0}` is empty")]
    EmptyCollectionName(String),
}

/// Validated map from language code to its dedicated collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionMap {
    entries: IndexMap<&'static str, String>,
}

impl CollectionMap {
    /// One `blog_<code>` collection per registry language
    pub fn conventional(prefix: &str) -> Self {
        let entries = registry::languages()
            .iter()
            .map(|lang| (lang.code, format!("{}_{}", prefix, lang.code)))
            .collect();
        Self { entries }
    }

    /// Validate a configured mapping against the registry
    pub fn from_config(
        configured: &IndexMap<String, String>,
        shared: &str,
    ) -> Result<Self, ConfigError> {
        let mut entries = IndexMap::new();

        for (code, collection) in configured {
            let lang = registry::language_by_code(code).ok_or_else(|| {
                ConfigError::UnknownLanguage {
                    code: code.clone(),
                    collection: collection.clone(),
                }
            })?;

            let collection = collection.trim();
            if collection.is_empty() {
                return Err(ConfigError::EmptyCollectionName(code.clone()));
            }
            if collection == shared {
                return Err(ConfigError::SharedCollectionReused(collection.to_string()));
            }

            entries.insert(lang.code, collection.to_string());
        }

        Ok(Self { entries })
    }

    /// Collection dedicated to `code`, if any
    pub fn collection_for(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conventional_map() {
        let map = CollectionMap::conventional("blog");
        assert_eq!(map.collection_for("en"), Some("blog_en"));
        assert_eq!(map.collection_for("es"), Some("blog_es"));
        assert_eq!(map.collection_for("fr"), None);
    }

    #[test]
    fn test_configured_map() {
        let mut configured = IndexMap::new();
        configured.insert("es".to_string(), "posts_spanish".to_string());

        let map = CollectionMap::from_config(&configured, "blog").unwrap();
        assert_eq!(map.collection_for("es"), Some("posts_spanish"));
        assert_eq!(map.collection_for("en"), None);
        assert_ne!(map, CollectionMap::conventional("blog"));
    }

    #[test]
    fn test_unknown_language_rejected() {
        let mut configured = IndexMap::new();
        configured.insert("../secret".to_string(), "blog_x".to_string());

        let err = CollectionMap::from_config(&configured, "blog").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownLanguage { code, .. } if code == "../secret"));
    }

    #[test]
    fn test_shared_and_empty_names_rejected() {
        let mut configured = IndexMap::new();
        configured.insert("es".to_string(), "blog".to_string());
        assert!(matches!(
            CollectionMap::from_config(&configured, "blog"),
            Err(ConfigError::SharedCollectionReused(_))
        ));

        configured.insert("es".to_string(), "  ".to_string());
        assert!(matches!(
            CollectionMap::from_config(&configured, "blog"),
            Err(ConfigError::EmptyCollectionName(_))
        ));
    }
}
