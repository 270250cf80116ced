//! Predicate-based post filtering and free-text search

use serde::{Deserialize, Serialize};

use crate::content::{BlogPost, Difficulty, TeacherLevel};

/// Reading-time buckets for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingTimeBucket {
    /// 5 minutes or less
    Quick,
    /// 6 to 15 minutes
    Medium,
    /// More than 15 minutes
    Long,
}

impl ReadingTimeBucket {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "quick" => Some(ReadingTimeBucket::Quick),
            "medium" => Some(ReadingTimeBucket::Medium),
            "long" => Some(ReadingTimeBucket::Long),
            _ => None,
        }
    }

    /// Whether a reading time (minutes) falls in this bucket
    pub fn contains(&self, minutes: u32) -> bool {
        match self {
            ReadingTimeBucket::Quick => minutes <= 5,
            ReadingTimeBucket::Medium => (6..=15).contains(&minutes),
            ReadingTimeBucket::Long => minutes > 15,
        }
    }
}

/// Search criteria; all set filters must match (logical AND)
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    /// Free-text query over title, description, excerpt, category name,
    /// tags, and author name (case-insensitive substring)
    pub query: Option<String>,
    /// Category slug equality
    pub category: Option<String>,
    /// Tag filters; a post matches when any of its tags contains any
    /// filter value (case-insensitive substring)
    pub tags: Vec<String>,
    /// Teacher-level membership
    pub teacher_level: Option<TeacherLevel>,
    /// Difficulty equality
    pub difficulty: Option<Difficulty>,
    /// Reading-time bucket
    pub reading_time: Option<ReadingTimeBucket>,
    /// Truncate the result to at most this many posts
    pub limit: Option<usize>,
}

impl SearchFilters {
    fn matches(&self, post: &BlogPost) -> bool {
        if let Some(category) = &self.category {
            if post.category.slug != *category {
                return false;
            }
        }

        if !self.tags.is_empty() {
            let post_tags: Vec<String> = post.tags.iter().map(|t| t.to_lowercase()).collect();
            let any_match = self.tags.iter().any(|wanted| {
                let wanted = wanted.to_lowercase();
                post_tags.iter().any(|t| t.contains(&wanted))
            });
            if !any_match {
                return false;
            }
        }

        if let Some(level) = self.teacher_level {
            if !post.teacher_level.contains(&level) {
                return false;
            }
        }

        if let Some(difficulty) = self.difficulty {
            if post.difficulty != difficulty {
                return false;
            }
        }

        if let Some(bucket) = self.reading_time {
            if !bucket.contains(post.reading_time) {
                return false;
            }
        }

        if let Some(query) = &self.query {
            let query = query.to_lowercase();
            if !query.is_empty() {
                let haystack = format!(
                    "{} {} {} {} {} {}",
                    post.title,
                    post.description,
                    post.excerpt,
                    post.category.name,
                    post.tags.join(" "),
                    post.author.name
                )
                .to_lowercase();
                if !haystack.contains(&query) {
                    return false;
                }
            }
        }

        true
    }
}

/// Filter a post collection, preserving its order
pub fn search_posts(posts: &[BlogPost], filters: &SearchFilters) -> Vec<BlogPost> {
    let matched = posts.iter().filter(|p| filters.matches(p)).cloned();
    match filters.limit {
        Some(limit) => matched.take(limit).collect(),
        None => matched.collect(),
    }
}
