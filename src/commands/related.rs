//! Related posts for a given slug

use anyhow::Result;

use crate::Blog;

/// Print the posts most similar to the given one
pub fn run(blog: &Blog, slug: &str, limit: usize) -> Result<()> {
    let Some(post) = blog.post_by_slug(slug)? else {
        anyhow::bail!("no published post with slug: {}", slug);
    };

    let related = blog.related_posts(&post, limit)?;
    if related.is_empty() {
        println!("No related posts for {}", slug);
        return Ok(());
    }

    println!("Related to {} ({}):", post.title, related.len());
    for other in related {
        println!(
            "  {} - {} [{}]",
            other.published_at.format("%Y-%m-%d"),
            other.title,
            other.category.slug
        );
    }

    Ok(())
}
