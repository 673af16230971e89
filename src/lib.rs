//! polyblog: the localized content layer of a personal blog
//!
//! Resolves which language a visitor sees, maps languages to URL path
//! prefixes, and queries posts across per-language and shared content
//! collections.

pub mod commands;
pub mod config;
pub mod content;
pub mod i18n;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{ContentQuery, DirectoryStore};
use i18n::FilePreferences;

/// A blog rooted at a directory
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content root holding one directory per collection
    pub content_dir: PathBuf,
    /// Visitor preference file
    pub preferences_path: PathBuf,
}

impl Blog {
    /// Open a blog directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let preferences_path = base_dir.join(&config.preferences_file);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            preferences_path,
        })
    }

    /// Query engine over the content directory
    pub fn query(&self) -> Result<ContentQuery<DirectoryStore>> {
        let store = DirectoryStore::new(&self.content_dir);
        Ok(ContentQuery::from_config(store, &self.config)?)
    }

    /// The stored visitor preferences
    pub fn preferences(&self) -> FilePreferences {
        FilePreferences::open(&self.preferences_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_new_without_config() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.content_dir, dir.path().join("src/content"));
        assert!(blog.query().is_ok());
    }

    #[test]
    fn test_new_with_invalid_collections() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            "content_dir: posts\ncollections:\n  de: blog_de\n",
        )
        .unwrap();

        let blog = Blog::new(dir.path()).unwrap();
        assert_eq!(blog.content_dir, dir.path().join("posts"));
        assert!(blog.query().is_err());
    }
}
