//! Heading extraction and table-of-contents generation.

use crate::parsers::ContentDocument;
use crate::slug::generate_slug;
use serde::{Deserialize, Serialize};

/// Heading texts grouped by level, each list in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headings {
    pub h1: Vec<String>,
    pub h2: Vec<String>,
    pub h3: Vec<String>,
    pub h4: Vec<String>,
    pub h5: Vec<String>,
    pub h6: Vec<String>,
}

impl Headings {
    pub fn from_document(doc: &ContentDocument) -> Self {
        let mut headings = Self::default();
        for node in doc.headings() {
            let bucket = match node.heading_level() {
                Some(1) => &mut headings.h1,
                Some(2) => &mut headings.h2,
                Some(3) => &mut headings.h3,
                Some(4) => &mut headings.h4,
                Some(5) => &mut headings.h5,
                Some(6) => &mut headings.h6,
                _ => continue,
            };
            bucket.push(node.text);
        }
        headings
    }

    /// Heading texts for a level between 1 and 6
    pub fn level(&self, level: u8) -> &[String] {
        match level {
            1 => self.h1.as_slice(),
            2 => self.h2.as_slice(),
            3 => self.h3.as_slice(),
            4 => self.h4.as_slice(),
            5 => self.h5.as_slice(),
            6 => self.h6.as_slice(),
            _ => &[],
        }
    }
}

/// Collects the text of every `h1`..`h6` heading in the content
pub fn extract_headings(content: &str) -> Headings {
    Headings::from_document(&ContentDocument::parse(content))
}

/// One linkable section heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingRecord {
    pub id: String,
    pub text: String,
    pub level: u8,
}

/// Section headings (`h2` and `h3`) in document order with their anchor ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableOfContents {
    pub entries: Vec<HeadingRecord>,
}

impl TableOfContents {
    /// Builds the table of contents for a parsed document.
    ///
    /// Ids have the form `heading-{position}-{slug}`, where position counts
    /// every collected section heading regardless of level. Two headings with
    /// the same text therefore never share an id.
    pub fn from_document(doc: &ContentDocument) -> Self {
        let entries = doc
            .headings()
            .into_iter()
            .filter_map(|node| match node.heading_level() {
                Some(level @ (2 | 3)) => Some((level, node.text)),
                _ => None,
            })
            .enumerate()
            .map(|(position, (level, text))| HeadingRecord {
                id: format!("heading-{}-{}", position, generate_slug(&text)),
                text,
                level,
            })
            .collect::<Vec<_>>();

        ::log::debug!("Built table of contents with {} entries", entries.len());
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeadingRecord> {
        self.entries.iter()
    }

    /// Anchor id of the section heading at `position` if its text matches
    pub fn anchor_for(&self, position: usize, text: &str) -> Option<&str> {
        self.entries
            .get(position)
            .filter(|record| record.text == text)
            .map(|record| record.id.as_str())
    }
}

/// Generates the table of contents for HTML content
pub fn generate_table_of_contents(content: &str) -> TableOfContents {
    TableOfContents::from_document(&ContentDocument::parse(content))
}

/// Writes the table-of-contents ids onto the content's section headings.
///
/// The content is parsed the same way the table of contents is built, and
/// `h2`/`h3` elements are paired with entries by position. An element whose
/// level disagrees with its entry, or that has no entry, keeps its
/// attributes. An existing `id` on a paired heading is replaced. Headings
/// inside comments or scripts are not elements and are never paired.
///
/// The returned HTML is re-serialized from the parse tree, so markup is
/// normalized (lowercase tags, double-quoted attributes, closed elements).
pub fn apply_heading_ids(content: &str, toc: &TableOfContents) -> String {
    let doc = ContentDocument::parse(content);
    let mut position = 0;

    doc.render_with_ids(|tag| {
        let level = match tag {
            "h2" => 2,
            "h3" => 3,
            _ => return None,
        };
        let entry = toc.entries.get(position);
        position += 1;

        entry
            .filter(|record| record.level == level)
            .map(|record| record.id.clone())
    })
}
