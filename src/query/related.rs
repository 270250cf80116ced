//! Related-post scoring

use crate::content::BlogPost;

/// Similarity score between two posts
///
/// Weights: same category +10, each shared tag +5, each shared teacher
/// level +2, same difficulty +1.
fn similarity(post: &BlogPost, other: &BlogPost) -> u32 {
    let mut score = 0;

    if other.category.slug == post.category.slug {
        score += 10;
    }

    score += 5 * other.tags.iter().filter(|&t| post.tags.contains(t)).count() as u32;

    score += 2 * other
        .teacher_level
        .iter()
        .filter(|&l| post.teacher_level.contains(l))
        .count() as u32;

    if other.difficulty == post.difficulty {
        score += 1;
    }

    score
}

/// Pick the posts most similar to `post` from an already-published collection
///
/// The subject post never appears in its own results, and posts sharing
/// nothing with it are left out entirely. Ordering is deterministic:
/// score descending, then newest first, then slug.
pub fn related_posts(post: &BlogPost, posts: &[BlogPost], limit: usize) -> Vec<BlogPost> {
    let mut scored: Vec<(u32, &BlogPost)> = posts
        .iter()
        .filter(|p| p.slug != post.slug)
        .map(|p| (similarity(post, p), p))
        .filter(|(score, _)| *score > 0)
        .collect();

    scored.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then_with(|| b.1.published_at.cmp(&a.1.published_at))
            .then_with(|| a.1.slug.cmp(&b.1.slug))
    });

    scored
        .into_iter()
        .take(limit)
        .map(|(_, p)| p.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::tests::sample_posts;

    #[test]
    fn test_never_includes_self() {
        let posts = sample_posts();
        for post in &posts {
            let related = related_posts(post, &posts, 10);
            assert!(related.iter().all(|p| p.slug != post.slug));
        }
    }

    #[test]
    fn test_scoring_order() {
        let posts = sample_posts();
        let subject = posts
            .iter()
            .find(|p| p.slug == "writing-better-emails")
            .unwrap();

        let related = related_posts(subject, &posts, 3);
        let slugs: Vec<&str> = related.iter().map(|p| p.slug.as_str()).collect();

        // difficult-conversations: same category (+10) and a shared tag (+5)
        // exit-tickets and station-rotation both score 3 (shared level +2,
        // same difficulty +1); the newer one wins the tie
        assert_eq!(
            slugs,
            vec!["difficult-conversations", "exit-tickets", "station-rotation"]
        );
    }

    #[test]
    fn test_zero_score_posts_excluded() {
        let posts = sample_posts();
        let subject = posts
            .iter()
            .find(|p| p.slug == "writing-better-emails")
            .unwrap();

        let related = related_posts(subject, &posts, 10);
        assert!(related.iter().all(|p| p.slug != "deep-dive-rubrics"));
    }

    #[test]
    fn test_limit_respected() {
        let posts = sample_posts();
        let subject = posts
            .iter()
            .find(|p| p.slug == "writing-better-emails")
            .unwrap();

        let related = related_posts(subject, &posts, 1);
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].slug, "difficult-conversations");
    }
}
