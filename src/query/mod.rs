//! Query layer - filtering, search, related posts, and statistics
//!
//! Everything here operates on an already-loaded, published-only,
//! date-sorted collection and preserves that order unless a query defines
//! its own.

mod filter;
mod related;
mod stats;

pub use filter::{search_posts, ReadingTimeBucket, SearchFilters};
pub use related::related_posts;
pub use stats::{compute_stats, BlogStats};
