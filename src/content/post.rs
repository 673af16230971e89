//! Post model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::registry;

/// A blog post as loaded from a content collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Entry id, derived from the file name
    pub id: String,

    /// Collection the entry was loaded from
    pub collection: String,

    /// Post title
    pub title: String,

    /// Summary used in listings and meta tags
    pub description: String,

    /// Publication date
    pub pub_date: DateTime<Utc>,

    /// Hero image reference, relative to the entry
    pub hero_image: String,

    /// Category from the site's closed category set
    pub category: String,

    /// Post tags
    pub tags: Vec<String>,

    /// Drafts are never listed
    pub draft: bool,

    /// Language code from front-matter
    pub language: Option<String>,

    /// Raw markdown body
    pub body: String,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(id: &str, title: &str, pub_date: DateTime<Utc>, category: &str) -> Self {
        Self {
            id: id.to_string(),
            collection: String::new(),
            title: title.to_string(),
            description: String::new(),
            pub_date,
            hero_image: String::new(),
            category: category.to_string(),
            tags: Vec::new(),
            draft: false,
            language: None,
            body: String::new(),
        }
    }

    /// Language the post belongs to
    ///
    /// Missing, empty and unregistered codes all count as the default language.
    pub fn effective_language(&self) -> &'static str {
        self.language
            .as_deref()
            .and_then(registry::language_by_code)
            .map(|lang| lang.code)
            .unwrap_or_else(registry::default_code)
    }

    /// Whether any tag equals `tag`, ignoring case
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }

    /// Get the previous (newer) post in a listing
    pub fn prev<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = self.position_in(posts)?;
        if pos > 0 {
            Some(&posts[pos - 1])
        } else {
            None
        }
    }

    /// Get the next (older) post in a listing
    pub fn next<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = self.position_in(posts)?;
        posts.get(pos + 1)
    }

    fn position_in(&self, posts: &[Post]) -> Option<usize> {
        posts
            .iter()
            .position(|p| p.id == self.id && p.collection == self.collection)
    }
}
