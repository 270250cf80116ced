//! Blog post model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use super::category::BlogCategory;
use super::markdown::MarkdownRenderer;

/// Post lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Draft,
    Published,
    Archived,
}

impl Status {
    /// Parse a front-matter status string
    ///
    /// Unknown values map to `Draft` so a typo never publishes a post.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "draft" => Some(Status::Draft),
            "published" => Some(Status::Published),
            "archived" => Some(Status::Archived),
            _ => None,
        }
    }
}

/// Post difficulty rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

/// School level a post is written for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TeacherLevel {
    Preschool,
    Elementary,
    MiddleSchool,
    HighSchool,
}

impl TeacherLevel {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "preschool" => Some(TeacherLevel::Preschool),
            "elementary" => Some(TeacherLevel::Elementary),
            "middle-school" | "middle_school" | "middleschool" => Some(TeacherLevel::MiddleSchool),
            "high-school" | "high_school" | "highschool" => Some(TeacherLevel::HighSchool),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TeacherLevel::Preschool => "preschool",
            TeacherLevel::Elementary => "elementary",
            TeacherLevel::MiddleSchool => "middle-school",
            TeacherLevel::HighSchool => "high-school",
        }
    }
}

/// Post author
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub role: Option<String>,
}

/// SEO metadata, fully populated by the loader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seo {
    pub meta_title: String,
    pub meta_description: String,
    pub keywords: Vec<String>,
    pub og_image: Option<String>,
}

/// A blog post
///
/// Constructed fresh on every scan of the content directory; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    /// URL-safe identity (front-matter `slug`, else derived from filename)
    pub slug: String,

    /// Post title
    pub title: String,

    /// Short description
    pub description: String,

    /// Raw markdown body
    pub content: String,

    /// Excerpt (explicit, or derived from the body)
    pub excerpt: String,

    /// Publication date
    pub published_at: DateTime<Local>,

    /// Last updated date
    pub updated_at: Option<DateTime<Local>>,

    /// Post author
    pub author: Author,

    /// Whitespace-delimited word count of the body
    pub word_count: usize,

    /// Reading time in minutes
    pub reading_time: u32,

    /// Category from the static catalog
    pub category: BlogCategory,

    /// Post tags
    pub tags: Vec<String>,

    /// School levels the post targets
    pub teacher_level: Vec<TeacherLevel>,

    /// Free-text subjects (Math, Science, ...)
    pub subject: Vec<String>,

    /// Difficulty rating
    pub difficulty: Difficulty,

    /// SEO block
    pub seo: Seo,

    /// Lifecycle status
    pub status: Status,

    /// Whether the post is featured
    pub featured: bool,

    /// View counter as recorded in front-matter
    pub views: u64,

    /// Source file path (relative to the content directory)
    pub source: String,

    /// Full source file path
    pub full_source: PathBuf,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl BlogPost {
    /// Render the markdown body to HTML
    pub fn render_html(&self) -> String {
        MarkdownRenderer::new().render(&self.content)
    }
}
