//! Text helper functions: word counts, slugs, excerpts

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Characters that never appear in a slug (keeps word chars, spaces, hyphens)
    static ref NON_SLUG: Regex = Regex::new(r"[^\w\s-]").unwrap();
    /// Runs of whitespace, underscores, or hyphens collapse to a single hyphen
    static ref SEPARATORS: Regex = Regex::new(r"[\s_-]+").unwrap();
    /// Markdown heading markers at the start of a line
    static ref HEADING_MARKERS: Regex = Regex::new(r"(?m)^#{1,6}[ \t]+").unwrap();
}

/// Count whitespace-delimited words in a text
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Reading time in minutes for a given word count, rounded up
///
/// # Examples
/// ```ignore
/// reading_time(450, 200) // -> 3
/// ```
pub fn reading_time(word_count: usize, words_per_minute: usize) -> u32 {
    if words_per_minute == 0 {
        return 0;
    }
    word_count.div_ceil(words_per_minute) as u32
}

/// Build a URL-safe slug from an arbitrary string
///
/// Lowercases, strips punctuation, collapses whitespace/underscores to
/// hyphens, and trims leading/trailing hyphens. Idempotent.
///
/// # Examples
/// ```ignore
/// create_slug("Hello, World! 2024") // -> "hello-world-2024"
/// ```
pub fn create_slug(input: &str) -> String {
    let lowered = input.to_lowercase();
    let stripped = NON_SLUG.replace_all(&lowered, "");
    let hyphenated = SEPARATORS.replace_all(&stripped, "-");
    hyphenated.trim_matches('-').to_string()
}

/// Build an excerpt from a Markdown body
///
/// Returns the body unchanged when it fits within `max_words`; otherwise
/// the first `max_words` words (with leading heading markers stripped)
/// followed by an ellipsis.
pub fn create_excerpt(body: &str, max_words: usize) -> String {
    if count_words(body) <= max_words {
        return body.to_string();
    }

    let stripped = HEADING_MARKERS.replace_all(body, "");
    let words: Vec<&str> = stripped.split_whitespace().take(max_words).collect();
    format!("{}...", words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \n\t  "), 0);
        assert_eq!(count_words("one two three"), 3);
        assert_eq!(count_words("  spaced \n out\twords "), 3);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        assert_eq!(reading_time(0, 200), 0);
        assert_eq!(reading_time(1, 200), 1);
        assert_eq!(reading_time(200, 200), 1);
        assert_eq!(reading_time(201, 200), 2);
        assert_eq!(reading_time(1000, 200), 5);
    }

    #[test]
    fn test_create_slug() {
        assert_eq!(create_slug("Hello, World! 2024"), "hello-world-2024");
        assert_eq!(create_slug("  My_File_Name  "), "my-file-name");
        assert_eq!(create_slug("Don't Panic"), "dont-panic");
        assert_eq!(create_slug("--already-sluggy--"), "already-sluggy");
    }

    #[test]
    fn test_create_slug_idempotent() {
        let once = create_slug("Parent/Teacher Conferences: A Guide");
        assert_eq!(create_slug(&once), once);
    }

    #[test]
    fn test_excerpt_short_body_unchanged() {
        let body = "# Heading\n\nJust a few words here.";
        assert_eq!(create_excerpt(body, 30), body);
    }

    #[test]
    fn test_excerpt_truncates_to_word_budget() {
        let body = (1..=40)
            .map(|i| format!("word{}", i))
            .collect::<Vec<_>>()
            .join(" ");
        let excerpt = create_excerpt(&body, 30);
        assert!(excerpt.ends_with("..."));
        let words: Vec<&str> = excerpt.trim_end_matches("...").split_whitespace().collect();
        assert_eq!(words.len(), 30);
        assert_eq!(words[0], "word1");
        assert_eq!(words[29], "word30");
    }

    #[test]
    fn test_excerpt_strips_heading_markers() {
        let mut body = String::from("## Big Title\n");
        for i in 0..40 {
            body.push_str(&format!("w{} ", i));
        }
        let excerpt = create_excerpt(&body, 30);
        assert!(excerpt.starts_with("Big Title"));
        assert!(!excerpt.contains('#'));
    }
}
