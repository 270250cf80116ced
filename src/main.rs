//! CLI entry point for edublog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use edublog::content::{Difficulty, TeacherLevel};
use edublog::query::{ReadingTimeBucket, SearchFilters};

#[derive(Parser)]
#[command(name = "edublog")]
#[command(version)]
#[command(about = "A blog content engine for Markdown/MDX content directories", long_about = None)]
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
    /// List blog content
    List {
        /// Type of content to list (post, category, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Show a single post
    Show {
        /// Slug of the post
        slug: String,

        /// Render the body to HTML
        #[arg(long)]
        html: bool,
    },

    /// Search posts
    Search {
        /// Free-text query
        #[arg(short, long)]
        query: Option<String>,

        /// Category slug
        #[arg(short, long)]
        category: Option<String>,

        /// Tag filter (repeatable, any-of)
        #[arg(short, long)]
        tag: Vec<String>,

        /// Teacher level (preschool, elementary, middle-school, high-school)
        #[arg(long)]
        level: Option<String>,

        /// Difficulty (beginner, intermediate, advanced)
        #[arg(long)]
        difficulty: Option<String>,

        /// Reading-time bucket (quick, medium, long)
        #[arg(long)]
        reading_time: Option<String>,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show posts related to a given one
    Related {
        /// Slug of the post
        slug: String,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show collection statistics
    Stats {
        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new draft post
    New {
        /// Title of the new post
        title: String,

        /// Category slug for the new post
        #[arg(short, long)]
        category: Option<String>,

        /// Filename (without extension) for the new post
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "edublog=debug,info"
    } else {
        "edublog=info"
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

    let blog = edublog::Blog::new(&base_dir)?;

    match cli.command {
        Commands::List { r#type } => {
            edublog::commands::list::run(&blog, &r#type)?;
        }

        Commands::Show { slug, html } => {
            edublog::commands::show::run(&blog, &slug, html)?;
        }

        Commands::Search {
            query,
            category,
            tag,
            level,
            difficulty,
            reading_time,
            limit,
            json,
        } => {
            let filters = SearchFilters {
                query,
                category,
                tags: tag,
                teacher_level: parse_filter(level.as_deref(), TeacherLevel::parse, "level")?,
                difficulty: parse_filter(difficulty.as_deref(), Difficulty::parse, "difficulty")?,
                reading_time: parse_filter(
                    reading_time.as_deref(),
                    ReadingTimeBucket::parse,
                    "reading time",
                )?,
                limit,
            };
            edublog::commands::search::run(&blog, &filters, json)?;
        }

        Commands::Related { slug, limit } => {
            let limit = limit.unwrap_or(blog.config.related_limit);
            edublog::commands::related::run(&blog, &slug, limit)?;
        }

        Commands::Stats { json } => {
            edublog::commands::stats::run(&blog, json)?;
        }

        Commands::New {
            title,
            category,
            path,
        } => {
            tracing::info!("Creating new post with title: {}", title);
            edublog::commands::new::run(&blog, &title, category.as_deref(), path.as_deref())?;
        }

        Commands::Version => {
            println!("edublog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Parse an optional CLI filter value, rejecting unknown values
fn parse_filter<T>(
    value: Option<&str>,
    parse: impl Fn(&str) -> Option<T>,
    what: &str,
) -> Result<Option<T>> {
    match value {
        None => Ok(None),
        Some(s) => match parse(s) {
            Some(v) => Ok(Some(v)),
            None => anyhow::bail!("unknown {}: {}", what, s),
        },
    }
}
