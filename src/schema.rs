//! schema.org `Article` structured data for published articles.

use crate::config::PublisherConfig;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Article fields needed for JSON-LD markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSchemaInput {
    pub title: String,
    pub description: String,
    /// Author name, published as an organization
    pub author: String,
    /// ISO 8601 publication timestamp
    pub published_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub canonical_url: String,
}

/// Builds the JSON-LD object for an article.
///
/// `dateModified` falls back to the publication date and `image` is left
/// out when the article has none.
pub fn generate_schema_org_article(
    input: &ArticleSchemaInput,
    publisher: &PublisherConfig,
) -> Value {
    let mut article = json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": input.title,
        "description": input.description,
        "author": {
            "@type": "Organization",
            "name": input.author,
        },
        "datePublished": input.published_date,
        "dateModified": input.modified_date.as_deref().unwrap_or(&input.published_date),
        "url": input.canonical_url,
        "publisher": {
            "@type": "Organization",
            "name": publisher.name,
            "logo": {
                "@type": "ImageObject",
                "url": publisher.logo_url,
            },
        },
    });

    if let (Some(image), Some(fields)) = (&input.image_url, article.as_object_mut()) {
        fields.insert("image".to_string(), Value::String(image.clone()));
    }

    article
}
