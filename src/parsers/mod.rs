pub mod html;
pub mod text;

#[cfg(test)]
mod tests;

pub use html::{ContentDocument, ElementNode, ImageNode};

/// Format of a content string handed to the analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentFormat {
    /// HTML produced by the rich-text editor
    #[default]
    Html,
    /// Text that carries no markup (excerpts, summaries)
    Text,
}

/// Entry point that turns content of any supported format into plain text
pub struct Parser;

impl Parser {
    /// Returns the text content for the given format
    pub fn plain_text(content: &str, format: ContentFormat) -> String {
        match format {
            ContentFormat::Html => html::strip_html(content),
            ContentFormat::Text => content.to_string(),
        }
    }

    /// Word count of content in the given format
    pub fn count_words(content: &str, format: ContentFormat) -> usize {
        let words = text::count_words(&Self::plain_text(content, format));
        ::log::debug!("Counted {} words in {:?} content", words, format);
        words
    }
}
