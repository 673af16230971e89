//! Content loader - serves collections from a content directory
//!
//! Each collection is a directory of Markdown entries under the content
//! root: `src/content/blog/first-post.md`, `src/content/blog_es/hola.md`.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::store::{ContentStore, StoreError};
use super::{FrontMatter, Post};

/// Loads collections from directories on disk
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Create a store rooted at the content directory
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Directory backing a collection
    pub fn collection_dir(&self, collection: &str) -> PathBuf {
        self.root.join(collection)
    }

    /// Entry files of a collection, in a stable order
    fn entry_paths(&self, dir: &Path) -> Result<Vec<PathBuf>, StoreError> {
        let mut paths = Vec::new();

        for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|e| StoreError::Io {
                path: e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf()),
                source: e.into(),
            })?;

            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                paths.push(path.to_path_buf());
            }
        }

        Ok(paths)
    }
}

impl ContentStore for DirectoryStore {
    async fn load(&self, collection: &str) -> Result<Vec<Post>, StoreError> {
        let dir = self.collection_dir(collection);
        if !dir.is_dir() {
            return Err(StoreError::NotFound(collection.to_string()));
        }

        let mut posts = Vec::new();
        for path in self.entry_paths(&dir)? {
            let content = tokio::fs::read_to_string(&path)
                .await
                .map_err(|source| StoreError::Io {
                    path: path.clone(),
                    source,
                })?;

            let post = parse_entry(&dir, &path, &content, collection).map_err(|e| {
                StoreError::Malformed {
                    path: path.clone(),
                    reason: format!("{:#}", e),
                }
            })?;
            posts.push(post);
        }

        tracing::debug!("Loaded {} entries from collection {}", posts.len(), collection);
        Ok(posts)
    }
}

/// Build a post from an entry file
fn parse_entry(dir: &Path, path: &Path, content: &str, collection: &str) -> anyhow::Result<Post> {
    let (fm, body) = FrontMatter::parse(content)?;

    let pub_date_raw = FrontMatter::require(&fm.pub_date, "pubDate")?;
    let pub_date = fm
        .parse_pub_date()
        .ok_or_else(|| anyhow::anyhow!("Unrecognized pubDate `{}`", pub_date_raw))?;

    Ok(Post {
        id: entry_id(dir, path),
        collection: collection.to_string(),
        title: FrontMatter::require(&fm.title, "title")?,
        description: FrontMatter::require(&fm.description, "description")?,
        pub_date,
        hero_image: FrontMatter::require(&fm.hero_image, "heroImage")?,
        category: FrontMatter::require(&fm.category, "category")?,
        tags: fm.tags,
        draft: fm.draft,
        language: fm.language.filter(|l| !l.trim().is_empty()),
        body: body.to_string(),
    })
}

/// Entry id: the path inside the collection without extension
fn entry_id(dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(dir).unwrap_or(path).with_extension("");
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "mdx" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_entry(root: &Path, collection: &str, name: &str, front: &str) {
        let dir = root.join(collection);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), format!("---\n{}\n---\n\nBody of {}\n", front, name)).unwrap();
    }

    const VALID: &str = "title: Hello\ndescription: First\npubDate: 2024-01-02\nheroImage: ./hero.png\ncategory: Programming\ntags: [Rust, CLI]";

    #[tokio::test]
    async fn test_load_collection() {
        let dir = TempDir::new().unwrap();
        write_entry(dir.path(), "blog", "hello.md", VALID);
        write_entry(dir.path(), "blog", "notes.txt", VALID);
        write_entry(
            dir.path(),
            "blog",
            "hola.mdx",
            &format!("{}\nlanguage: es\ndraft: true", VALID),
        );

        let store = DirectoryStore::new(dir.path());
        let posts = store.load("blog").await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, "hello");
        assert_eq!(posts[0].collection, "blog");
        assert_eq!(posts[0].tags, vec!["Rust", "CLI"]);
        assert_eq!(posts[0].language, None);
        assert!(posts[0].body.contains("Body of hello.md"));
        assert_eq!(posts[1].id, "hola");
        assert_eq!(posts[1].language.as_deref(), Some("es"));
        assert!(posts[1].draft);
    }

    #[tokio::test]
    async fn test_nested_entry_id() {
        let dir = TempDir::new().unwrap();
        write_entry(dir.path(), "blog/2024", "deep.md", VALID);

        let store = DirectoryStore::new(dir.path());
        let posts = store.load("blog").await.unwrap();
        assert_eq!(posts[0].id, "2024/deep");
    }

    #[tokio::test]
    async fn test_missing_collection() {
        let dir = TempDir::new().unwrap();
        let store = DirectoryStore::new(dir.path());
        let result = store.load("blog_es").await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_empty_collection() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("blog")).unwrap();
        let store = DirectoryStore::new(dir.path());
        assert!(store.load("blog").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_offset_pub_dates_load() {
        let dir = TempDir::new().unwrap();
        let front = "title: Hello\ndescription: First\nheroImage: ./hero.png\ncategory: Misc";
        write_entry(
            dir.path(),
            "blog",
            "a.md",
            &format!("{}\npubDate: 2024-01-02 10:00:00 +02:00", front),
        );
        write_entry(
            dir.path(),
            "blog",
            "b.md",
            &format!("{}\npubDate: 2024-01-02T10:00:00+0200", front),
        );

        let store = DirectoryStore::new(dir.path());
        let posts = store.load("blog").await.unwrap();
        assert_eq!(posts.len(), 2);
        for post in &posts {
            assert_eq!(post.pub_date.format("%Y-%m-%d %H:%M").to_string(), "2024-01-02 08:00");
        }
    }

    #[tokio::test]
    async fn test_malformed_entry() {
        let dir = TempDir::new().unwrap();
        write_entry(dir.path(), "blog", "broken.md", "title: No date");

        let store = DirectoryStore::new(dir.path());
        match store.load("blog").await {
            Err(StoreError::Malformed { path, reason }) => {
                assert!(path.ends_with("broken.md"));
                assert!(reason.contains("pubDate"));
            }
            other => panic!("expected malformed entry, got {:?}", other),
        }
    }
}
