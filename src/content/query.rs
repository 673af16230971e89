//! Post queries
//!
//! Every query starts from [`ContentQuery::get_posts`]: the language's own
//! collection when it has entries, otherwise the shared collection filtered
//! by each entry's language. Drafts are dropped, newest posts come first.
//! Nothing is cached; each call reloads from the store.

use indexmap::IndexSet;
use thiserror::Error;

use super::paginate::{paginate, Page};
use super::store::{ContentStore, Retrieval, StoreError};
use super::Post;
use crate::config::{CollectionMap, ConfigError, SiteConfig};

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("shared collection `{collection}` is unavailable: {source}")]
    SharedStoreUnavailable {
        collection: String,
        #[source]
        source: StoreError,
    },
}

/// Query engine over a content store
pub struct ContentQuery<S> {
    store: S,
    collections: CollectionMap,
    shared_collection: String,
    pagination_size: usize,
}

impl<S: ContentStore> ContentQuery<S> {
    pub fn new(store: S, collections: CollectionMap, shared_collection: &str) -> Self {
        Self {
            store,
            collections,
            shared_collection: shared_collection.to_string(),
            pagination_size: SiteConfig::default().pagination_size,
        }
    }

    /// Build an engine with the collections and page size of a site
    pub fn from_config(store: S, config: &SiteConfig) -> Result<Self, ConfigError> {
        let mut query = Self::new(store, config.collection_map()?, &config.shared_collection);
        query.pagination_size = config.pagination_size;
        Ok(query)
    }

    /// Published posts in `language`, newest first, at most `max` of them
    pub async fn get_posts(
        &self,
        max: Option<usize>,
        language: &str,
    ) -> Result<Vec<Post>, ContentError> {
        let posts = self.posts_for_language(language).await?;
        Ok(published_newest_first(posts, max))
    }

    /// Published posts across all languages, newest first
    pub async fn get_all_posts(&self, max: Option<usize>) -> Result<Vec<Post>, ContentError> {
        let posts = self.load_shared().await?;
        Ok(published_newest_first(posts, max))
    }

    /// Distinct categories in order of first appearance
    pub async fn get_categories(&self, language: &str) -> Result<Vec<String>, ContentError> {
        let posts = self.get_posts(None, language).await?;
        let categories: IndexSet<String> = posts.into_iter().map(|p| p.category).collect();
        Ok(categories.into_iter().collect())
    }

    /// Distinct lowercased tags in order of first appearance
    pub async fn get_tags(&self, language: &str) -> Result<Vec<String>, ContentError> {
        let posts = self.get_posts(None, language).await?;
        let tags: IndexSet<String> = posts
            .iter()
            .flat_map(|p| p.tags.iter().map(|t| t.to_lowercase()))
            .collect();
        Ok(tags.into_iter().collect())
    }

    /// Posts carrying `tag`, ignoring case
    pub async fn get_posts_by_tag(
        &self,
        tag: &str,
        language: &str,
    ) -> Result<Vec<Post>, ContentError> {
        let posts = self.get_posts(None, language).await?;
        Ok(posts.into_iter().filter(|p| p.has_tag(tag)).collect())
    }

    /// Posts in `category`, ignoring case on both sides
    pub async fn filter_posts_by_category(
        &self,
        category: &str,
        language: &str,
    ) -> Result<Vec<Post>, ContentError> {
        let category = category.to_lowercase();
        let posts = self.get_posts(None, language).await?;
        Ok(posts
            .into_iter()
            .filter(|p| p.category.to_lowercase() == category)
            .collect())
    }

    /// Languages that have at least one published post in the shared collection
    pub async fn get_available_languages(&self) -> Result<Vec<&'static str>, ContentError> {
        let posts = self.get_all_posts(None).await?;
        let languages: IndexSet<&'static str> =
            posts.iter().map(|p| p.effective_language()).collect();
        Ok(languages.into_iter().collect())
    }

    /// One page of the listing for `language`
    pub async fn get_page(
        &self,
        language: &str,
        page_num: usize,
    ) -> Result<Option<Page<Post>>, ContentError> {
        let posts = self.get_posts(None, language).await?;
        Ok(paginate(&posts, self.pagination_size, page_num))
    }

    async fn posts_for_language(&self, language: &str) -> Result<Vec<Post>, ContentError> {
        let dedicated = match self.collections.collection_for(language) {
            Some(name) => (name, Retrieval::from(self.store.load(name).await)),
            None => {
                tracing::debug!("No dedicated collection for language {}", language);
                return self.shared_for_language(language).await;
            }
        };

        match dedicated {
            (_, Retrieval::Found(posts)) => Ok(posts),
            (name, Retrieval::Empty) => {
                tracing::debug!("Collection {} is empty, using shared collection", name);
                self.shared_for_language(language).await
            }
            (name, Retrieval::Unavailable(e)) => {
                tracing::debug!("Collection {} unavailable ({}), using shared collection", name, e);
                self.shared_for_language(language).await
            }
        }
    }

    async fn shared_for_language(&self, language: &str) -> Result<Vec<Post>, ContentError> {
        let posts = self.load_shared().await?;
        Ok(posts
            .into_iter()
            .filter(|p| p.effective_language() == language)
            .collect())
    }

    async fn load_shared(&self) -> Result<Vec<Post>, ContentError> {
        match Retrieval::from(self.store.load(&self.shared_collection).await) {
            Retrieval::Found(posts) => Ok(posts),
            Retrieval::Empty => Ok(Vec::new()),
            Retrieval::Unavailable(source) => Err(ContentError::SharedStoreUnavailable {
                collection: self.shared_collection.clone(),
                source,
            }),
        }
    }
}

/// Drop drafts, sort newest first (stable on equal dates), keep at most `max`
fn published_newest_first(posts: Vec<Post>, max: Option<usize>) -> Vec<Post> {
    let mut posts: Vec<Post> = posts.into_iter().filter(|p| !p.draft).collect();
    posts.sort_by(|a, b| b.pub_date.cmp(&a.pub_date));
    if let Some(max) = max {
        posts.truncate(max);
    }
    posts
}
