//! List site content

use anyhow::Result;

use crate::content::Post;
use crate::i18n::{translation, TranslationKey};
use crate::Blog;

/// Options shared by the listing commands
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub language: String,
    pub max: Option<usize>,
    pub page: Option<usize>,
}

/// List site content by type
pub async fn run(blog: &Blog, content_type: &str, opts: &ListOptions) -> Result<()> {
    let query = blog.query()?;
    let lang = opts.language.as_str();

    match content_type {
        "post" | "posts" => {
            if let Some(page_num) = opts.page {
                match query.get_page(lang, page_num).await? {
                    Some(page) => {
                        println!("Page {}/{}:", page.current, page.total);
                        print_posts(&page.items, lang);
                    }
                    None => println!("No page {}", page_num),
                }
            } else {
                let posts = query.get_posts(opts.max, lang).await?;
                println!("{} ({}):", translation(lang, TranslationKey::Blog), posts.len());
                print_posts(&posts, lang);
            }
        }
        "all" => {
            let posts = query.get_all_posts(opts.max).await?;
            println!("Posts ({}):", posts.len());
            for post in &posts {
                println!(
                    "  {} - {} [{}] ({})",
                    post.pub_date.format("%Y-%m-%d"),
                    post.title,
                    post.id,
                    post.effective_language()
                );
            }
        }
        "tag" | "tags" => {
            let tags = query.get_tags(lang).await?;
            println!("{} ({}):", translation(lang, TranslationKey::Tags), tags.len());
            for tag in tags {
                println!("  {}", tag);
            }
        }
        "category" | "categories" => {
            let categories = query.get_categories(lang).await?;
            println!(
                "{} ({}):",
                translation(lang, TranslationKey::Categories),
                categories.len()
            );
            for category in categories {
                println!("  {}", category);
            }
        }
        "language" | "languages" => {
            let languages = query.get_available_languages().await?;
            println!(
                "{} ({}):",
                translation(lang, TranslationKey::Language),
                languages.len()
            );
            for code in languages {
                if let Some(language) = crate::i18n::language_by_code(code) {
                    println!("  {} {} ({})", language.flag, language.display_name, code);
                }
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, all, tag, category, language",
                content_type
            );
        }
    }

    Ok(())
}

/// Posts carrying a tag
pub async fn by_tag(blog: &Blog, tag: &str, language: &str) -> Result<()> {
    let posts = blog.query()?.get_posts_by_tag(tag, language).await?;
    println!("#{} ({}):", tag.to_lowercase(), posts.len());
    print_posts(&posts, language);
    Ok(())
}

/// Posts in a category
pub async fn by_category(blog: &Blog, category: &str, language: &str) -> Result<()> {
    let posts = blog
        .query()?
        .filter_posts_by_category(category, language)
        .await?;
    println!("{} ({}):", category, posts.len());
    print_posts(&posts, language);
    Ok(())
}

fn print_posts(posts: &[Post], language: &str) {
    if posts.is_empty() {
        println!("  {}", translation(language, TranslationKey::NoPostsFound));
        return;
    }

    for post in posts {
        let tags = if post.tags.is_empty() {
            String::new()
        } else {
            format!(" #{}", post.tags.join(" #"))
        };
        println!(
            "  {} - {} [{}] {}{}",
            post.pub_date.format("%Y-%m-%d"),
            post.title,
            post.id,
            post.category,
            tags
        );
    }
}
