//! Word count and reading time.

use crate::parsers::ContentDocument;
use crate::parsers::text;
use serde::{Deserialize, Serialize};

/// Reading speed used when no configuration overrides it
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Whole minutes needed to read `word_count` words, rounded up.
///
/// Zero words reads in zero minutes. A `words_per_minute` of zero is treated
/// as the default speed.
pub fn reading_time_minutes(word_count: usize, words_per_minute: u32) -> u32 {
    let speed = if words_per_minute == 0 {
        DEFAULT_WORDS_PER_MINUTE
    } else {
        words_per_minute
    } as usize;

    word_count.div_ceil(speed) as u32
}

/// Reading time of HTML content at the default speed
pub fn calculate_reading_time(content: &str) -> u32 {
    let words = text::count_words(&ContentDocument::parse(content).text());
    reading_time_minutes(words, DEFAULT_WORDS_PER_MINUTE)
}

/// Content statistics for a parsed article body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetrics {
    pub word_count: usize,
    pub reading_time_minutes: u32,
    pub heading_count: usize,
    pub image_count: usize,
    pub images_missing_alt: usize,
}

impl ContentMetrics {
    /// Computes metrics from an already-parsed document
    pub fn from_document(doc: &ContentDocument, words_per_minute: u32) -> Self {
        let word_count = text::count_words(&doc.text());
        let images = doc.images();

        Self {
            word_count,
            reading_time_minutes: reading_time_minutes(word_count, words_per_minute),
            heading_count: doc.headings().len(),
            image_count: images.len(),
            images_missing_alt: images.iter().filter(|img| img.missing_alt()).count(),
        }
    }

    /// Parses HTML content and computes its metrics
    pub fn from_html(content: &str, words_per_minute: u32) -> Self {
        Self::from_document(&ContentDocument::parse(content), words_per_minute)
    }
}
