//! Create a new post

use anyhow::Result;
use std::fs;

use crate::helpers::create_slug;
use crate::Blog;

/// Create a new draft post file in the content directory
pub fn run(blog: &Blog, title: &str, category: Option<&str>, path: Option<&str>) -> Result<()> {
    let now = chrono::Local::now();

    fs::create_dir_all(&blog.content_dir)?;

    // Generate filename from the configured pattern
    let filename = if let Some(p) = path {
        format!("{}.md", p)
    } else {
        let slug = create_slug(title);
        blog.config
            .new_post_name
            .replace(":title", &slug)
            .replace(":year", &now.format("%Y").to_string())
            .replace(":month", &now.format("%m").to_string())
            .replace(":day", &now.format("%d").to_string())
    };

    let file_path = blog.content_dir.join(&filename);
    if file_path.exists() {
        anyhow::bail!("file already exists: {:?}", file_path);
    }

    let category = category.unwrap_or(&blog.config.default_category);
    let content = format!(
        r#"---
title: {}
description:
date: {}
category: {}
tags: []
status: draft
---
"#,
        title,
        now.format("%Y-%m-%d %H:%M:%S"),
        category
    );

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlogConfig;
    use tempfile::TempDir;

    #[test]
    fn test_new_post_is_draft_and_invisible() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::with_config(dir.path(), BlogConfig::default());

        run(&blog, "My Fresh Post", None, None).unwrap();

        let file = blog.content_dir.join("my-fresh-post.md");
        assert!(file.exists());

        // Drafts never surface through the query layer
        assert!(blog.post_by_slug("my-fresh-post").unwrap().is_none());
    }

    #[test]
    fn test_existing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let blog = Blog::with_config(dir.path(), BlogConfig::default());

        run(&blog, "Twice", None, None).unwrap();
        assert!(run(&blog, "Twice", None, None).is_err());
    }
}
