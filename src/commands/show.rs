//! Show a single post

use anyhow::Result;

use crate::Blog;

/// Print one post by slug; `html` renders the body instead of the raw source
pub fn run(blog: &Blog, slug: &str, html: bool) -> Result<()> {
    let Some(post) = blog.post_by_slug(slug)? else {
        anyhow::bail!("no published post with slug: {}", slug);
    };

    println!("{}", post.title);
    println!("  slug:         {}", post.slug);
    println!("  published:    {}", post.published_at.format("%Y-%m-%d"));
    if let Some(updated) = post.updated_at {
        println!("  updated:      {}", updated.format("%Y-%m-%d"));
    }
    println!("  author:       {}", post.author.name);
    println!("  category:     {}", post.category.name);
    if !post.tags.is_empty() {
        println!("  tags:         {}", post.tags.join(", "));
    }
    if !post.teacher_level.is_empty() {
        let levels: Vec<&str> = post.teacher_level.iter().map(|l| l.as_str()).collect();
        println!("  level:        {}", levels.join(", "));
    }
    println!("  difficulty:   {}", post.difficulty.as_str());
    println!(
        "  reading time: {} min ({} words)",
        post.reading_time, post.word_count
    );
    println!("  excerpt:      {}", post.excerpt);
    println!();

    if html {
        println!("{}", post.render_html());
    } else {
        println!("{}", post.content);
    }

    Ok(())
}
