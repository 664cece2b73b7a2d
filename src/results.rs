use crate::config::RatingThresholds;
use crate::toc::TableOfContents;
use serde::{Deserialize, Serialize};

/// Outcome of scoring an article
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoScore {
    /// Score between 0 and 100
    pub score: u8,

    /// Must-fix problems, in rule evaluation order
    pub issues: Vec<String>,

    /// Optional improvements, in rule evaluation order
    pub suggestions: Vec<String>,
}

impl SeoScore {
    /// True when no rule was triggered
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.suggestions.is_empty()
    }
}

/// Band a score falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreRating {
    Good,
    Warning,
    Poor,
}

impl ScoreRating {
    pub fn from_score(score: u8, thresholds: &RatingThresholds) -> Self {
        if score >= thresholds.good {
            ScoreRating::Good
        } else if score >= thresholds.warning {
            ScoreRating::Warning
        } else {
            ScoreRating::Poor
        }
    }
}

/// Everything the editor shows for an article: score, rating and structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleReport {
    pub score: u8,
    pub rating: ScoreRating,
    pub issues: Vec<String>,
    pub suggestions: Vec<String>,
    pub word_count: usize,
    pub reading_time_minutes: u32,
    pub table_of_contents: TableOfContents,
}

impl ArticleReport {
    pub fn new(
        seo: SeoScore,
        rating: ScoreRating,
        word_count: usize,
        reading_time_minutes: u32,
        table_of_contents: TableOfContents,
    ) -> Self {
        Self {
            score: seo.score,
            rating,
            issues: seo.issues,
            suggestions: seo.suggestions,
            word_count,
            reading_time_minutes,
            table_of_contents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bands() {
        let thresholds = RatingThresholds::default();
        assert_eq!(ScoreRating::from_score(100, &thresholds), ScoreRating::Good);
        assert_eq!(ScoreRating::from_score(80, &thresholds), ScoreRating::Good);
        assert_eq!(ScoreRating::from_score(79, &thresholds), ScoreRating::Warning);
        assert_eq!(ScoreRating::from_score(60, &thresholds), ScoreRating::Warning);
        assert_eq!(ScoreRating::from_score(59, &thresholds), ScoreRating::Poor);
        assert_eq!(ScoreRating::from_score(0, &thresholds), ScoreRating::Poor);
    }

    #[test]
    fn test_rating_custom_thresholds() {
        let thresholds = RatingThresholds { good: 95, warning: 90 };
        assert_eq!(ScoreRating::from_score(92, &thresholds), ScoreRating::Warning);
    }

    #[test]
    fn test_rating_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ScoreRating::Warning).unwrap(),
            "\"warning\""
        );
    }
}
