//! Search the post collection

use anyhow::Result;

use crate::query::SearchFilters;
use crate::Blog;

/// Run a search and print matches as a table or JSON
pub fn run(blog: &Blog, filters: &SearchFilters, json: bool) -> Result<()> {
    let posts = blog.search(filters)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
        return Ok(());
    }

    println!("Matches ({}):", posts.len());
    for post in posts {
        println!(
            "  {} - {} [{}] {} min",
            post.published_at.format("%Y-%m-%d"),
            post.title,
            post.category.slug,
            post.reading_time
        );
    }

    Ok(())
}
