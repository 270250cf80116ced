//! Blog configuration (blog.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::content::Author;

/// Default author applied to posts without an author block
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    pub name: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub role: Option<String>,
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            name: "Editorial Team".to_string(),
            bio: None,
            avatar: None,
            role: Some("Staff Writer".to_string()),
        }
    }
}

impl AuthorConfig {
    /// Convert to the post-level author record
    pub fn to_author(&self) -> Author {
        Author {
            name: self.name.clone(),
            bio: self.bio.clone(),
            avatar: self.avatar.clone(),
            role: self.role.clone(),
        }
    }
}

/// Main blog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    // Site
    pub title: String,
    pub description: String,
    pub url: String,
    pub language: String,
    pub author: AuthorConfig,

    // Content
    pub content_dir: String,
    pub default_category: String,

    // Derived-field tuning
    pub excerpt_words: usize,
    pub words_per_minute: usize,

    // Queries
    pub related_limit: usize,

    // Writing
    pub new_post_name: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            title: "Teaching Notes".to_string(),
            description: String::new(),
            url: "http://example.com".to_string(),
            language: "en".to_string(),
            author: AuthorConfig::default(),

            content_dir: "content/blog".to_string(),
            default_category: "teaching-strategies".to_string(),

            excerpt_words: 30,
            words_per_minute: 200,

            related_limit: 3,

            new_post_name: ":title.md".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
