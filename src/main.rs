//! CLI entry point for polyblog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use polyblog::commands::list::ListOptions;
use polyblog::i18n::DEFAULT_LANGUAGE;

#[derive(Parser)]
#[command(name = "polyblog")]
#[command(version)]
#[command(about = "Query the localized posts of a static blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, tags, categories or languages
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, all, tag, category, language)
        #[arg(default_value = "post")]
        r#type: String,

        /// Language code
        #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
        lang: String,

        /// Maximum number of posts
        #[arg(short, long)]
        max: Option<usize>,

        /// Page number, using the configured page size
        #[arg(short, long, conflicts_with = "max")]
        page: Option<usize>,
    },

    /// List posts carrying a tag
    Tag {
        tag: String,

        #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
        lang: String,
    },

    /// List posts in a category
    Category {
        category: String,

        #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
        lang: String,
    },

    /// Create a new draft post
    New {
        /// Title of the new post
        title: String,

        /// Category of the new post
        #[arg(short = 'C', long)]
        category: String,

        #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
        lang: String,
    },

    /// Show or store the visitor language
    Lang {
        #[command(subcommand)]
        action: LangAction,
    },

    /// Show how a URL path maps to languages
    Path {
        path: String,

        /// Encode the path for this language
        #[arg(short, long)]
        to: Option<String>,
    },

    /// Look up UI strings
    #[command(alias = "t")]
    Translate {
        /// Translation key (all keys when omitted)
        key: Option<String>,

        #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
        lang: String,
    },

    /// Display version information
    Version,
}

#[derive(Subcommand)]
enum LangAction {
    /// Resolve the active language
    Current {
        /// Client language tag, e.g. "es-MX" (defaults to the system locale)
        #[arg(short, long)]
        accept: Option<String>,
    },

    /// Store an explicit language choice
    Set { code: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "polyblog=debug,info"
    } else {
        "polyblog=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List {
            r#type,
            lang,
            max,
            page,
        } => {
            let blog = polyblog::Blog::new(&base_dir)?;
            let opts = ListOptions {
                language: lang,
                max,
                page,
            };
            polyblog::commands::list::run(&blog, &r#type, &opts).await?;
        }

        Commands::Tag { tag, lang } => {
            let blog = polyblog::Blog::new(&base_dir)?;
            polyblog::commands::list::by_tag(&blog, &tag, &lang).await?;
        }

        Commands::Category { category, lang } => {
            let blog = polyblog::Blog::new(&base_dir)?;
            polyblog::commands::list::by_category(&blog, &category, &lang).await?;
        }

        Commands::New {
            title,
            category,
            lang,
        } => {
            let blog = polyblog::Blog::new(&base_dir)?;
            tracing::info!("Creating new {} post with title: {}", lang, title);
            let path = polyblog::commands::new::create_post(&blog, &title, &category, &lang)?;
            println!("Created: {:?}", path);
        }

        Commands::Lang { action } => {
            let blog = polyblog::Blog::new(&base_dir)?;
            match action {
                LangAction::Current { accept } => {
                    polyblog::commands::lang::current(&blog, accept.as_deref())?
                }
                LangAction::Set { code } => polyblog::commands::lang::set(&blog, &code)?,
            }
        }

        Commands::Path { path, to } => {
            polyblog::commands::lang::inspect_path(&path, to.as_deref());
        }

        Commands::Translate { key, lang } => {
            polyblog::commands::lang::translate(key.as_deref(), &lang)?;
        }

        Commands::Version => {
            println!("polyblog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
