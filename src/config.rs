use crate::error::{Error, Result};
use crate::metrics::DEFAULT_WORDS_PER_MINUTE;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Score thresholds for the good / warning / poor rating bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingThresholds {
    /// Lowest score rated as good
    #[serde(default = "default_good_threshold")]
    pub good: u8,

    /// Lowest score rated as a warning
    #[serde(default = "default_warning_threshold")]
    pub warning: u8,
}

impl Default for RatingThresholds {
    fn default() -> Self {
        Self {
            good: default_good_threshold(),
            warning: default_warning_threshold(),
        }
    }
}

/// Organization named as publisher in schema.org article markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublisherConfig {
    /// Publisher name
    #[serde(default = "default_publisher_name")]
    pub name: String,

    /// Absolute URL of the publisher logo
    #[serde(default = "default_publisher_logo_url")]
    pub logo_url: String,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            name: default_publisher_name(),
            logo_url: default_publisher_logo_url(),
        }
    }
}

/// Configuration for the article analyzer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Reading speed used for reading time
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: u32,

    /// Rating bands applied to the SEO score
    #[serde(default)]
    pub rating: RatingThresholds,

    /// Publisher used in generated structured data
    #[serde(default)]
    pub publisher: PublisherConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            words_per_minute: default_words_per_minute(),
            rating: RatingThresholds::default(),
            publisher: PublisherConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(contents: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the analyzer cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.words_per_minute == 0 {
            return Err(Error::InvalidConfig(
                "words_per_minute must be greater than zero".to_string(),
            ));
        }
        if self.rating.good > 100 {
            return Err(Error::InvalidConfig(format!(
                "rating.good must be at most 100, got {}",
                self.rating.good
            )));
        }
        if self.rating.warning > self.rating.good {
            return Err(Error::InvalidConfig(format!(
                "rating.warning ({}) must not exceed rating.good ({})",
                self.rating.warning, self.rating.good
            )));
        }
        Ok(())
    }
}

/// Default value for words_per_minute
fn default_words_per_minute() -> u32 {
    DEFAULT_WORDS_PER_MINUTE
}

/// Default lowest good score
fn default_good_threshold() -> u8 {
    80
}

/// Default lowest warning score
fn default_warning_threshold() -> u8 {
    60
}

fn default_publisher_name() -> String {
    "Notably".to_string()
}

fn default_publisher_logo_url() -> String {
    "https://notably.no/logo.png".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = AnalyzerConfig::from_json("{}").unwrap();
        assert_eq!(config.words_per_minute, 200);
        assert_eq!(config.rating, RatingThresholds { good: 80, warning: 60 });
        assert_eq!(config.publisher.name, "Notably");
        assert_eq!(config.publisher.logo_url, "https://notably.no/logo.png");
    }

    #[test]
    fn test_partial_override() {
        let config = AnalyzerConfig::from_json(
            r#"{"words_per_minute": 250, "rating": {"good": 90}, "publisher": {"name": "Acme"}}"#,
        )
        .unwrap();
        assert_eq!(config.words_per_minute, 250);
        assert_eq!(config.rating.good, 90);
        assert_eq!(config.rating.warning, 60);
        assert_eq!(config.publisher.name, "Acme");
        assert_eq!(config.publisher.logo_url, "https://notably.no/logo.png");
    }

    #[test]
    fn test_default_matches_empty_json() {
        let from_json = AnalyzerConfig::from_json("{}").unwrap();
        assert_eq!(from_json, AnalyzerConfig::default());
        assert!(AnalyzerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_speed() {
        let err = AnalyzerConfig::from_json(r#"{"words_per_minute": 0}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let err =
            AnalyzerConfig::from_json(r#"{"rating": {"good": 50, "warning": 70}}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = AnalyzerConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = AnalyzerConfig::from_file("/nonexistent/article-seo.json").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
