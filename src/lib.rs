pub mod config;
pub mod error;
pub mod metrics;
pub mod parsers;
pub mod results;
pub mod schema;
pub mod seo;
pub mod slug;
pub mod toc;

// Re-export commonly used types for convenience
pub use config::AnalyzerConfig;
pub use error::{Error, Result};
pub use metrics::{ContentMetrics, calculate_reading_time};
pub use results::{ArticleReport, ScoreRating, SeoScore};
pub use schema::{ArticleSchemaInput, generate_schema_org_article};
pub use seo::{SeoInput, calculate_seo_score};
pub use slug::generate_slug;
pub use toc::{
    HeadingRecord, Headings, TableOfContents, apply_heading_ids, extract_headings,
    generate_table_of_contents,
};

use parsers::{ContentDocument, ContentFormat, Parser};
use std::path::Path;

/// Main entry point for scoring and analysing articles
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Create an analyzer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reading speed used for reading time
    pub fn with_words_per_minute(mut self, words_per_minute: u32) -> Self {
        if words_per_minute > 0 {
            self.config.words_per_minute = words_per_minute;
        } else {
            ::log::warn!("Ignoring reading speed of 0 words per minute");
        }
        self
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let config = AnalyzerConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(self, config_str: &str) -> Result<Self> {
        let config = AnalyzerConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Score an article
    pub fn score(&self, input: &SeoInput) -> SeoScore {
        calculate_seo_score(input)
    }

    /// Rating band for a score under the configured thresholds
    pub fn rate(&self, score: u8) -> ScoreRating {
        ScoreRating::from_score(score, &self.config.rating)
    }

    /// Reading time of HTML content in whole minutes at the configured speed
    pub fn reading_time(&self, content: &str) -> u32 {
        self.reading_time_as(content, ContentFormat::Html)
    }

    /// Reading time of content in the given format
    pub fn reading_time_as(&self, content: &str, format: ContentFormat) -> u32 {
        let words = Parser::count_words(content, format);
        metrics::reading_time_minutes(words, self.config.words_per_minute)
    }

    pub fn table_of_contents(&self, content: &str) -> TableOfContents {
        generate_table_of_contents(content)
    }

    /// Score, rating, metrics and table of contents from a single parse
    pub fn report(&self, input: &SeoInput) -> ArticleReport {
        let doc = ContentDocument::parse(&input.content);
        let seo = seo::score_document(input, &doc);
        let metrics = ContentMetrics::from_document(&doc, self.config.words_per_minute);
        let toc = TableOfContents::from_document(&doc);
        let rating = self.rate(seo.score);

        ::log::info!(
            "Article {:?} scored {} ({:?}), {} words, {} min read",
            input.slug,
            seo.score,
            rating,
            metrics.word_count,
            metrics.reading_time_minutes
        );

        ArticleReport::new(
            seo,
            rating,
            metrics.word_count,
            metrics.reading_time_minutes,
            toc,
        )
    }

    /// schema.org markup with the configured publisher
    pub fn schema(&self, input: &ArticleSchemaInput) -> serde_json::Value {
        generate_schema_org_article(input, &self.config.publisher)
    }
}
