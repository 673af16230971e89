//! Create a new post

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use crate::i18n::registry;
use crate::Blog;

const MAX_TITLE_LEN: usize = 60;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Scaffold<'a> {
    title: &'a str,
    description: &'a str,
    pub_date: String,
    hero_image: &'a str,
    category: &'a str,
    tags: Vec<String>,
    draft: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
}

/// Create a draft post in the collection serving `language`
///
/// The post goes to the language's dedicated collection when that directory
/// exists, otherwise to the shared collection with a `language` field.
pub fn create_post(blog: &Blog, title: &str, category: &str, language: &str) -> Result<PathBuf> {
    if !registry::is_supported(language) {
        anyhow::bail!("Unsupported language: {}", language);
    }
    if title.chars().count() > MAX_TITLE_LEN {
        tracing::warn!("Title is longer than {} characters", MAX_TITLE_LEN);
    }

    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Title {:?} has no characters usable in a file name", title);
    }

    let collections = blog.config.collection_map()?;
    let dedicated = collections
        .collection_for(language)
        .map(|name| blog.content_dir.join(name))
        .filter(|dir| dir.is_dir());

    let (target_dir, language_field) = match dedicated {
        Some(dir) => (dir, None),
        None => {
            let field = (language != registry::default_code()).then_some(language);
            (blog.content_dir.join(&blog.config.shared_collection), field)
        }
    };
    fs::create_dir_all(&target_dir)?;

    let file_path = target_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let scaffold = Scaffold {
        title,
        description: title,
        pub_date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
        hero_image: "./hero.png",
        category,
        tags: Vec::new(),
        draft: true,
        language: language_field,
    };
    let content = format!("---\n{}---\n\n", serde_yaml::to_string(&scaffold)?);

    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}
