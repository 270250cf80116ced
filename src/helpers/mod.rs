//! Helper functions for text processing
//!
//! These are the pure derivations the content loader builds on: word
//! counts, URL-safe slugs, and excerpt extraction.

mod text;

pub use text::*;
