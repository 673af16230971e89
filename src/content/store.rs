//! Content store abstraction
//!
//! A store serves named collections of posts. The query engine only ever
//! calls [`ContentStore::load`]; how entries are kept is up to the store.

use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use thiserror::Error;

use super::Post;

/// Errors raised while retrieving a collection
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("collection not found: {0}")]
    NotFound(String),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed entry {path:?}: {reason}")]
    Malformed { path: PathBuf, reason: String },
}

/// Source of post collections
pub trait ContentStore {
    /// Load every entry of `collection`
    fn load(&self, collection: &str) -> impl Future<Output = Result<Vec<Post>, StoreError>> + Send;
}

/// Outcome of loading one collection
#[derive(Debug)]
pub enum Retrieval {
    Found(Vec<Post>),
    Empty,
    Unavailable(StoreError),
}

impl From<Result<Vec<Post>, StoreError>> for Retrieval {
    fn from(result: Result<Vec<Post>, StoreError>) -> Self {
        match result {
            Ok(posts) if posts.is_empty() => Retrieval::Empty,
            Ok(posts) => Retrieval::Found(posts),
            Err(e) => Retrieval::Unavailable(e),
        }
    }
}

/// Collections held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: HashMap<String, Vec<Post>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a collection, tagging each post with its collection name
    pub fn with_collection(mut self, name: &str, posts: Vec<Post>) -> Self {
        let posts = posts
            .into_iter()
            .map(|mut post| {
                post.collection = name.to_string();
                post
            })
            .collect();
        self.collections.insert(name.to_string(), posts);
        self
    }
}

impl ContentStore for MemoryStore {
    async fn load(&self, collection: &str) -> Result<Vec<Post>, StoreError> {
        self.collections
            .get(collection)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(collection.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_memory_store_load() {
        let store = MemoryStore::new()
            .with_collection("blog", vec![Post::new("a", "A", Utc::now(), "misc")]);

        let posts = store.load("blog").await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].collection, "blog");

        let missing = store.load("blog_es").await;
        assert!(matches!(missing, Err(StoreError::NotFound(name)) if name == "blog_es"));
    }

    #[test]
    fn test_retrieval_from_result() {
        assert!(matches!(Retrieval::from(Ok(Vec::new())), Retrieval::Empty));
        assert!(matches!(
            Retrieval::from(Ok(vec![Post::new("a", "A", Utc::now(), "misc")])),
            Retrieval::Found(posts) if posts.len() == 1
        ));
        assert!(matches!(
            Retrieval::from(Err(StoreError::NotFound("x".to_string()))),
            Retrieval::Unavailable(_)
        ));
    }
}
