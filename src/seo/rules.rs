//! Scoring rules: weights, limits and the messages shown in the editor.
//!
//! Weights are part of the scoring contract. Stored scores are compared
//! across releases, so changing a value here changes every article's score.

use crate::parsers::text::utf16_len;
use crate::results::SeoScore;

/// Bucket a triggered rule reports into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Issue,
    Suggestion,
}

/// A message with the points it costs
#[derive(Debug, Clone, Copy)]
pub struct Penalty {
    pub severity: Severity,
    pub weight: i32,
    pub message: &'static str,
}

const fn issue(weight: i32, message: &'static str) -> Penalty {
    Penalty {
        severity: Severity::Issue,
        weight,
        message,
    }
}

const fn suggestion(weight: i32, message: &'static str) -> Penalty {
    Penalty {
        severity: Severity::Suggestion,
        weight,
        message,
    }
}

/// Presence and length limits for a text field
pub struct LengthRule {
    pub missing: Penalty,
    pub max_len: usize,
    pub too_long: Penalty,
    pub min_len: usize,
    pub too_short: Penalty,
}

pub const TITLE: LengthRule = LengthRule {
    missing: issue(20, "Tittel mangler"),
    max_len: 60,
    too_long: issue(5, "Tittel er for lang (over 60 tegn)"),
    min_len: 30,
    too_short: suggestion(3, "Tittel kan være litt lengre for bedre SEO (30-60 tegn)"),
};

pub const META_TITLE: LengthRule = LengthRule {
    missing: issue(15, "Meta-tittel mangler"),
    max_len: 60,
    too_long: issue(5, "Meta-tittel er for lang (over 60 tegn)"),
    min_len: 30,
    too_short: suggestion(3, "Meta-tittel kan være litt lengre (30-60 tegn)"),
};

pub const META_DESCRIPTION: LengthRule = LengthRule {
    missing: issue(15, "Meta-beskrivelse mangler"),
    max_len: 160,
    too_long: issue(5, "Meta-beskrivelse er for lang (over 160 tegn)"),
    min_len: 120,
    too_short: suggestion(3, "Meta-beskrivelse kan være litt lengre (120-160 tegn)"),
};

pub const MIN_WORDS: usize = 300;
pub const RECOMMENDED_WORDS: usize = 600;
pub const TOO_SHORT: Penalty = issue(15, "Artikkel er for kort (under 300 ord)");
pub const COULD_BE_LONGER: Penalty =
    suggestion(5, "Artikkel kan være lengre for bedre SEO (minst 1000 ord anbefales)");

pub const H1_MISSING: Penalty = issue(10, "H1-overskrift mangler");
pub const H1_MULTIPLE: Penalty = issue(5, "Flere enn én H1-overskrift (kun én anbefales)");
pub const H2_MISSING: Penalty = suggestion(5, "Legg til H2-overskrifter for bedre struktur");

pub const MIN_KEYWORDS: usize = 3;
pub const KEYWORDS_MISSING: Penalty = suggestion(5, "Legg til nøkkelord for bedre SEO");
pub const KEYWORDS_FEW: Penalty = suggestion(3, "Legg til flere nøkkelord (5-8 anbefales)");

pub const MAX_SLUG_LEN: usize = 60;
pub const SLUG_MISSING: Penalty = issue(10, "URL-slug mangler");
pub const SLUG_LONG: Penalty = suggestion(2, "URL-slug er ganske lang (kortere er bedre)");

pub const FEATURED_IMAGE_MISSING: Penalty =
    suggestion(5, "Legg til et hovedbilde for bedre deling på sosiale medier");

pub const ALT_TEXT_WEIGHT_PER_IMAGE: i32 = 3;
pub const ALT_TEXT_MAX_WEIGHT: i32 = 15;

/// Running total of deductions and messages
#[derive(Debug)]
pub struct Findings {
    score: i32,
    issues: Vec<String>,
    suggestions: Vec<String>,
}

impl Default for Findings {
    fn default() -> Self {
        Self {
            score: 100,
            issues: Vec::new(),
            suggestions: Vec::new(),
        }
    }
}

impl Findings {
    pub fn apply(&mut self, penalty: Penalty) {
        self.record(penalty.severity, penalty.weight, penalty.message.to_string());
    }

    pub fn record(&mut self, severity: Severity, weight: i32, message: String) {
        ::log::debug!("SEO rule triggered (-{}): {}", weight, message);
        self.score -= weight;
        match severity {
            Severity::Issue => self.issues.push(message),
            Severity::Suggestion => self.suggestions.push(message),
        }
    }

    /// Checks presence and length of an optional text field
    pub fn check_length(&mut self, value: Option<&str>, rule: &LengthRule) {
        let len = value.map(utf16_len).unwrap_or(0);
        if len == 0 {
            self.apply(rule.missing);
        } else if len > rule.max_len {
            self.apply(rule.too_long);
        } else if len < rule.min_len {
            self.apply(rule.too_short);
        }
    }

    pub fn check_word_count(&mut self, words: usize) {
        if words < MIN_WORDS {
            self.apply(TOO_SHORT);
        } else if words < RECOMMENDED_WORDS {
            self.apply(COULD_BE_LONGER);
        }
    }

    pub fn check_headings(&mut self, h1_count: usize, h2_count: usize) {
        match h1_count {
            0 => self.apply(H1_MISSING),
            1 => {}
            _ => self.apply(H1_MULTIPLE),
        }

        if h2_count == 0 {
            self.apply(H2_MISSING);
        }
    }

    pub fn check_keywords(&mut self, count: usize) {
        if count == 0 {
            self.apply(KEYWORDS_MISSING);
        } else if count < MIN_KEYWORDS {
            self.apply(KEYWORDS_FEW);
        }
    }

    pub fn check_slug(&mut self, slug: &str) {
        let len = utf16_len(slug);
        if len == 0 {
            self.apply(SLUG_MISSING);
        } else if len > MAX_SLUG_LEN {
            self.apply(SLUG_LONG);
        }
    }

    pub fn check_featured_image(&mut self, present: bool) {
        if !present {
            self.apply(FEATURED_IMAGE_MISSING);
        }
    }

    pub fn check_alt_text(&mut self, missing: usize) {
        if missing == 0 {
            return;
        }
        let weight = i32::try_from(missing)
            .unwrap_or(i32::MAX)
            .saturating_mul(ALT_TEXT_WEIGHT_PER_IMAGE)
            .min(ALT_TEXT_MAX_WEIGHT);
        self.record(
            Severity::Issue,
            weight,
            format!("{} bilde(r) mangler alt-tekst", missing),
        );
    }

    /// Clamps the score into 0..=100
    pub fn finish(self) -> SeoScore {
        SeoScore {
            score: self.score.clamp(0, 100) as u8,
            issues: self.issues,
            suggestions: self.suggestions,
        }
    }
}
