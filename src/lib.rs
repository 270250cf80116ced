//! edublog: a blog content engine for Markdown/MDX content directories
//!
//! This crate scans a directory of Markdown/MDX files with front-matter,
//! normalizes each file into an immutable [`content::BlogPost`], and layers
//! search, related-post, and statistics queries on top. There is no cache
//! and no persistence: every query is a fresh, synchronous scan of the
//! content directory, so callers always see the current on-disk state.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod query;

use anyhow::Result;
use std::path::Path;

use content::{BlogPost, ContentLoader};
use query::{BlogStats, SearchFilters};

/// The main blog application
#[derive(Clone)]
pub struct Blog {
    /// Blog configuration
    pub config: config::BlogConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory holding the markdown sources
    pub content_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a new blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("blog.yml");

        let config = if config_path.exists() {
            config::BlogConfig::load(&config_path)?
        } else {
            config::BlogConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a blog instance with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::BlogConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);

        Self {
            config,
            base_dir,
            content_dir,
        }
    }

    /// All published posts, newest first
    pub fn all_posts(&self) -> Result<Vec<BlogPost>> {
        ContentLoader::new(self).load_posts()
    }

    /// Find a published post by its slug
    pub fn post_by_slug(&self, slug: &str) -> Result<Option<BlogPost>> {
        let posts = self.all_posts()?;
        Ok(posts.into_iter().find(|p| p.slug == slug))
    }

    /// Featured posts, optionally truncated
    pub fn featured_posts(&self, limit: Option<usize>) -> Result<Vec<BlogPost>> {
        let mut posts: Vec<BlogPost> = self
            .all_posts()?
            .into_iter()
            .filter(|p| p.featured)
            .collect();
        if let Some(limit) = limit {
            posts.truncate(limit);
        }
        Ok(posts)
    }

    /// Posts in a category, optionally truncated
    pub fn posts_by_category(&self, slug: &str, limit: Option<usize>) -> Result<Vec<BlogPost>> {
        let mut posts: Vec<BlogPost> = self
            .all_posts()?
            .into_iter()
            .filter(|p| p.category.slug == slug)
            .collect();
        if let Some(limit) = limit {
            posts.truncate(limit);
        }
        Ok(posts)
    }

    /// The most recent posts
    pub fn recent_posts(&self, limit: usize) -> Result<Vec<BlogPost>> {
        let mut posts = self.all_posts()?;
        posts.truncate(limit);
        Ok(posts)
    }

    /// Search the collection with AND-composed filters
    pub fn search(&self, filters: &SearchFilters) -> Result<Vec<BlogPost>> {
        let posts = self.all_posts()?;
        Ok(query::search_posts(&posts, filters))
    }

    /// Posts most similar to the given one
    pub fn related_posts(&self, post: &BlogPost, limit: usize) -> Result<Vec<BlogPost>> {
        let posts = self.all_posts()?;
        Ok(query::related_posts(post, &posts, limit))
    }

    /// Aggregate statistics over the published collection
    pub fn stats(&self) -> Result<BlogStats> {
        let posts = self.all_posts()?;
        Ok(query::compute_stats(&posts))
    }
}
