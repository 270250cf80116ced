//! List blog content

use anyhow::Result;
use std::collections::HashMap;

use crate::content::CATEGORIES;
use crate::Blog;

/// List blog content by type
pub fn run(blog: &Blog, content_type: &str) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let posts = blog.all_posts()?;
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} [{}]",
                    post.published_at.format("%Y-%m-%d"),
                    post.title,
                    post.source
                );
            }
        }
        "category" | "categories" => {
            let posts = blog.all_posts()?;
            let mut counts: HashMap<&str, usize> = HashMap::new();
            for post in &posts {
                *counts.entry(post.category.slug.as_str()).or_insert(0) += 1;
            }
            println!("Categories ({}):", CATEGORIES.len());
            for category in CATEGORIES.iter() {
                let count = counts.get(category.slug.as_str()).copied().unwrap_or(0);
                println!("  {} ({})", category.name, count);
            }
        }
        "tag" | "tags" => {
            let posts = blog.all_posts()?;
            let mut tags: HashMap<String, usize> = HashMap::new();
            for post in &posts {
                for tag in &post.tags {
                    *tags.entry(tag.clone()).or_insert(0) += 1;
                }
            }
            println!("Tags ({}):", tags.len());
            let mut tags: Vec<_> = tags.into_iter().collect();
            tags.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category, tag",
                content_type
            );
        }
    }

    Ok(())
}
