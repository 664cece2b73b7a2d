pub mod rules;


use crate::parsers::{ContentDocument, text};
use crate::results::SeoScore;
use crate::toc::Headings;
use rules::{Findings, META_DESCRIPTION, META_TITLE, TITLE};
use serde::{Deserialize, Serialize};

/// Article fields the editor sends for scoring.
///
/// Field names follow the editor payload (`metaTitle`, `featuredImage`, ...).
/// Absent optional fields count as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoInput {
    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,

    /// Article body as HTML
    #[serde(default)]
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,

    #[serde(default)]
    pub slug: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<bool>,
}

/// Scores an article between 0 and 100.
///
/// Rules run in a fixed order (title, meta title, meta description, body
/// length, headings, keywords, slug, featured image, image alt text) and the
/// issue and suggestion lists keep that order. Never fails: empty or
/// malformed input only lowers the score.
pub fn calculate_seo_score(input: &SeoInput) -> SeoScore {
    score_document(input, &ContentDocument::parse(&input.content))
}

/// Scores an article whose content has already been parsed.
///
/// `doc` must be the parse of `input.content`.
pub fn score_document(input: &SeoInput, doc: &ContentDocument) -> SeoScore {
    let mut findings = Findings::default();

    findings.check_length(Some(input.title.as_str()), &TITLE);
    findings.check_length(input.meta_title.as_deref(), &META_TITLE);
    findings.check_length(input.meta_description.as_deref(), &META_DESCRIPTION);

    let word_count = text::count_words(&doc.text());
    findings.check_word_count(word_count);

    let headings = Headings::from_document(doc);
    findings.check_headings(headings.h1.len(), headings.h2.len());

    findings.check_keywords(input.keywords.as_ref().map_or(0, Vec::len));
    findings.check_slug(&input.slug);
    findings.check_featured_image(input.featured_image.unwrap_or(false));

    let missing_alt = doc.images().iter().filter(|img| img.missing_alt()).count();
    findings.check_alt_text(missing_alt);

    let score = findings.finish();
    ::log::debug!(
        "Scored article {:?}: {} ({} issues, {} suggestions, {} words)",
        input.slug,
        score.score,
        score.issues.len(),
        score.suggestions.len(),
        word_count
    );
    score
}
