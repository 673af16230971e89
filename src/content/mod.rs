//! Content module - posts, collections, and the queries over them

mod frontmatter;
pub mod loader;
pub mod paginate;
mod post;
pub mod query;
pub mod store;

pub use frontmatter::FrontMatter;
pub use loader::DirectoryStore;
pub use paginate::{paginate, Page};
pub use post::Post;
pub use query::{ContentError, ContentQuery};
pub use store::{ContentStore, MemoryStore, Retrieval, StoreError};
