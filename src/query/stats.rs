//! Collection-level statistics

use indexmap::IndexMap;
use serde::Serialize;

use crate::content::{BlogPost, CATEGORIES};

/// Aggregate statistics over the published collection
#[derive(Debug, Clone, Serialize)]
pub struct BlogStats {
    pub total_posts: usize,
    pub total_categories: usize,
    /// Mean reading time in minutes, rounded to the nearest integer
    pub average_reading_time: u32,
    /// Sum of per-post view counters
    pub total_views: u64,
    /// Name of the category with the most posts (catalog order breaks ties)
    pub most_popular_category: Option<String>,
    /// Post count per category slug, in catalog order
    pub posts_by_category: IndexMap<String, usize>,
}

/// Compute statistics for a post collection
pub fn compute_stats(posts: &[BlogPost]) -> BlogStats {
    let mut posts_by_category: IndexMap<String, usize> = CATEGORIES
        .iter()
        .map(|c| (c.slug.clone(), 0))
        .collect();
    for post in posts {
        *posts_by_category.entry(post.category.slug.clone()).or_insert(0) += 1;
    }

    let most_popular_category = if posts.is_empty() {
        None
    } else {
        // The map is in catalog order, so a strict comparison keeps the
        // earliest catalog entry on ties
        let mut best: Option<(&str, usize)> = None;
        for (slug, &count) in &posts_by_category {
            if count > 0 && best.map_or(true, |(_, n)| count > n) {
                best = Some((slug.as_str(), count));
            }
        }
        best.and_then(|(slug, _)| {
            CATEGORIES
                .iter()
                .find(|c| c.slug == slug)
                .map(|c| c.name.clone())
        })
    };

    let average_reading_time = if posts.is_empty() {
        0
    } else {
        let total: u64 = posts.iter().map(|p| p.reading_time as u64).sum();
        (total as f64 / posts.len() as f64).round() as u32
    };

    BlogStats {
        total_posts: posts.len(),
        total_categories: CATEGORIES.len(),
        average_reading_time,
        total_views: posts.iter().map(|p| p.views).sum(),
        most_popular_category,
        posts_by_category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::tests::sample_posts;

    #[test]
    fn test_empty_collection() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total_posts, 0);
        assert_eq!(stats.total_categories, 8);
        assert_eq!(stats.average_reading_time, 0);
        assert_eq!(stats.total_views, 0);
        assert_eq!(stats.most_popular_category, None);
    }

    #[test]
    fn test_aggregates() {
        let posts = sample_posts();
        let stats = compute_stats(&posts);

        assert_eq!(stats.total_posts, 5);
        assert_eq!(stats.total_categories, 8);
        // reading times 3, 8, 4, 18, 6 -> mean 7.8 -> 8
        assert_eq!(stats.average_reading_time, 8);
        assert_eq!(stats.total_views, 490);
    }

    #[test]
    fn test_most_popular_tie_breaks_on_catalog_order() {
        let posts = sample_posts();
        let stats = compute_stats(&posts);

        // parent-communication and teaching-strategies both have 2 posts;
        // parent-communication comes first in the catalog
        assert_eq!(stats.posts_by_category["parent-communication"], 2);
        assert_eq!(stats.posts_by_category["teaching-strategies"], 2);
        assert_eq!(
            stats.most_popular_category,
            Some("Parent Communication".to_string())
        );
    }

    #[test]
    fn test_counts_keyed_in_catalog_order() {
        let stats = compute_stats(&sample_posts());
        let keys: Vec<&String> = stats.posts_by_category.keys().collect();
        assert_eq!(keys[0], "parent-communication");
        assert_eq!(keys[1], "teaching-strategies");
        assert_eq!(keys.len(), 8);
    }
}
