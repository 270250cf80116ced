//! Content loader - scans the content directory and builds blog posts
//!
//! Every load is a one-shot pass over the directory: each call re-reads
//! and re-parses every file, so callers always see the current on-disk
//! state. A bad post never breaks the whole collection; it is logged and
//! skipped.

use anyhow::Result;
use chrono::Local;
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

use super::{
    category, Author, BlogPost, Difficulty, FrontMatter, Seo, Status, TeacherLevel,
};
use crate::helpers::{count_words, create_excerpt, create_slug, reading_time};
use crate::Blog;

/// Structured per-file load failures
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("missing required `title` field")]
    MissingTitle,
}

/// Loads posts from the content directory
pub struct ContentLoader<'a> {
    blog: &'a Blog,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// Load all published posts, newest first
    pub fn load_posts(&self) -> Result<Vec<BlogPost>> {
        let content_dir = &self.blog.content_dir;
        if !content_dir.exists() {
            tracing::warn!("content directory {:?} does not exist", content_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(content_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && is_content_file(path) {
                match self.load_post(path) {
                    Ok(post) => {
                        // Drafts and archived posts never leave the
                        // collection boundary
                        if post.status == Status::Published {
                            posts.push(post);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("failed to load post {:?}: {}", path, e);
                    }
                }
            }
        }

        // Sort by date descending (newest first); equal dates fall back to
        // slug order so repeated scans are stable
        posts.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then_with(|| a.slug.cmp(&b.slug))
        });

        Ok(posts)
    }

    /// Load a single post from a file
    pub fn load_post(&self, path: &Path) -> Result<BlogPost> {
        let raw = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&raw)?;

        let title = fm.title.clone().ok_or(ContentError::MissingTitle)?;

        // Get file metadata for date fallbacks
        let metadata = fs::metadata(path)?;
        let file_modified = metadata
            .modified()
            .ok()
            .map(chrono::DateTime::<Local>::from);

        let published_at = fm
            .parse_date()
            .unwrap_or_else(|| file_modified.unwrap_or_else(Local::now));
        let updated_at = fm.parse_updated();

        // Identity: explicit slug, else the filename
        let filename = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled");
        let slug = fm
            .slug
            .as_deref()
            .map(create_slug)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| create_slug(filename));

        let word_count = count_words(body);
        let reading_time = fm
            .reading_time
            .unwrap_or_else(|| reading_time(word_count, self.blog.config.words_per_minute));

        let excerpt = fm
            .excerpt
            .clone()
            .unwrap_or_else(|| create_excerpt(body, self.blog.config.excerpt_words));
        let description = fm.description.clone().unwrap_or_default();

        let category = fm
            .category
            .as_deref()
            .and_then(|c| category::category_by_slug(&create_slug(c)))
            .or_else(|| category::category_by_slug(&self.blog.config.default_category))
            .unwrap_or_else(category::default_category)
            .clone();

        let tags = normalize_list(&fm.tags);
        let subject = normalize_list(&fm.subject);
        let teacher_level: Vec<TeacherLevel> = normalize_list(&fm.teacher_level)
            .iter()
            .filter_map(|s| {
                let level = TeacherLevel::parse(s);
                if level.is_none() {
                    tracing::debug!("dropping unknown teacher level {:?} in {:?}", s, path);
                }
                level
            })
            .collect();

        let difficulty = match fm.difficulty.as_deref() {
            None => Difficulty::Beginner,
            Some(s) => Difficulty::parse(s).unwrap_or_else(|| {
                tracing::warn!("unknown difficulty {:?} in {:?}, using beginner", s, path);
                Difficulty::Beginner
            }),
        };

        let status = match fm.status.as_deref() {
            None => Status::Published,
            Some(s) => Status::parse(s).unwrap_or_else(|| {
                tracing::warn!("unknown status {:?} in {:?}, treating as draft", s, path);
                Status::Draft
            }),
        };

        let author = match fm.author.as_ref() {
            Some(a) => Author {
                name: a
                    .name
                    .clone()
                    .unwrap_or_else(|| self.blog.config.author.name.clone()),
                bio: a.bio.clone(),
                avatar: a.avatar.clone(),
                role: a.role.clone(),
            },
            None => self.blog.config.author.to_author(),
        };

        let seo_fm = fm.seo.clone().unwrap_or_default();
        let seo = Seo {
            meta_title: seo_fm.meta_title.unwrap_or_else(|| title.clone()),
            meta_description: seo_fm.meta_description.unwrap_or_else(|| {
                if description.is_empty() {
                    excerpt.clone()
                } else {
                    description.clone()
                }
            }),
            keywords: if seo_fm.keywords.is_empty() {
                tags.clone()
            } else {
                normalize_list(&seo_fm.keywords)
            },
            og_image: seo_fm.og_image,
        };

        let source = path
            .strip_prefix(&self.blog.content_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        Ok(BlogPost {
            slug,
            title,
            description,
            content: body.to_string(),
            excerpt,
            published_at,
            updated_at,
            author,
            word_count,
            reading_time,
            category,
            tags,
            teacher_level,
            subject,
            difficulty,
            seo,
            status,
            featured: fm.featured,
            views: fm.views,
            source,
            full_source: path.to_path_buf(),
            extra: fm.extra,
        })
    }
}

/// Check if a file is a markdown/MDX content file
fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "mdx" || e == "markdown")
        .unwrap_or(false)
}

/// Drop empty entries from a list-typed front-matter field
fn normalize_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
