//! Collection statistics

use anyhow::Result;

use crate::Blog;

/// Print collection statistics as a table or JSON
pub fn run(blog: &Blog, json: bool) -> Result<()> {
    let stats = blog.stats()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Posts:                {}", stats.total_posts);
    println!("Categories:           {}", stats.total_categories);
    println!("Avg reading time:     {} min", stats.average_reading_time);
    println!("Total views:          {}", stats.total_views);
    match &stats.most_popular_category {
        Some(name) => println!("Most popular:         {}", name),
        None => println!("Most popular:         -"),
    }
    println!();
    println!("Posts by category:");
    for (slug, count) in &stats.posts_by_category {
        println!("  {} ({})", slug, count);
    }

    Ok(())
}
