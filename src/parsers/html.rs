use scraper::{ElementRef, Html, Node, Selector};
use std::collections::BTreeMap;
use std::sync::LazyLock;

static HEADING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1, h2, h3, h4, h5, h6").unwrap());
static IMAGE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("img").unwrap());

/// Elements serialized without an end tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Elements whose text children are written without escaping
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "script", "style", "xmp", "iframe", "noembed", "noframes", "plaintext", "noscript",
];

/// An element pulled out of a parsed content fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    /// Lowercase tag name (`h2`, `img`, ...)
    pub tag: String,
    /// Concatenated text of all descendant text nodes
    pub text: String,
    /// Attributes as written on the element
    pub attributes: BTreeMap<String, String>,
}

impl ElementNode {
    fn from_element(element: ElementRef<'_>) -> Self {
        Self {
            tag: element.value().name().to_string(),
            text: element.text().collect(),
            attributes: element
                .value()
                .attrs()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }

    /// Returns the value of an attribute, if present
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Heading level for `h1`..`h6`, `None` for any other tag
    pub fn heading_level(&self) -> Option<u8> {
        match self.tag.as_str() {
            "h1" => Some(1),
            "h2" => Some(2),
            "h3" => Some(3),
            "h4" => Some(4),
            "h5" => Some(5),
            "h6" => Some(6),
            _ => None,
        }
    }
}

/// An `<img>` element reduced to the attributes the scorer looks at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageNode {
    pub src: String,
    pub alt: Option<String>,
}

impl ImageNode {
    /// True when the image has no alt attribute or an empty one
    pub fn missing_alt(&self) -> bool {
        self.alt.as_deref().is_none_or(str::is_empty)
    }
}

/// Parsed article content.
///
/// The content is parsed as a fragment, so the editor output does not need
/// `<html>`/`<body>` wrappers. Malformed markup is recovered the way a browser
/// would recover it; parsing never fails.
pub struct ContentDocument {
    html: Html,
}

impl ContentDocument {
    /// Parses an HTML fragment
    pub fn parse(content: &str) -> Self {
        let html = Html::parse_fragment(content);
        if !html.errors.is_empty() {
            ::log::debug!(
                "Recovered from {} HTML parse errors in content",
                html.errors.len()
            );
        }
        Self { html }
    }

    /// Text content with all markup stripped.
    ///
    /// Text nodes are joined without a separator, so inline markup inside a
    /// word does not split it.
    pub fn text(&self) -> String {
        self.html.root_element().text().collect()
    }

    /// All elements with the given tag name, in document order.
    ///
    /// A tag name that is not a valid selector yields no elements.
    pub fn select(&self, tag: &str) -> Vec<ElementNode> {
        match Selector::parse(tag) {
            Ok(selector) => self
                .html
                .select(&selector)
                .map(ElementNode::from_element)
                .collect(),
            Err(e) => {
                ::log::debug!("Ignoring invalid tag selector {:?}: {}", tag, e);
                Vec::new()
            }
        }
    }

    /// All `h1`..`h6` elements in document order
    pub fn headings(&self) -> Vec<ElementNode> {
        self.html
            .select(&HEADING_SELECTOR)
            .map(ElementNode::from_element)
            .collect()
    }

    /// All `<img>` elements in document order
    pub fn images(&self) -> Vec<ImageNode> {
        let images = self
            .html
            .select(&IMAGE_SELECTOR)
            .map(|e| ImageNode {
                src: e.value().attr("src").unwrap_or_default().to_string(),
                alt: e.value().attr("alt").map(str::to_string),
            })
            .collect::<Vec<_>>();

        ::log::debug!("HTML parser found {} images", images.len());
        images
    }

    /// Serializes the fragment back to HTML, optionally assigning element ids.
    ///
    /// `assign_id` is called with the tag name of every element in document
    /// order, the same order [`ContentDocument::headings`] reports. When it
    /// returns an id, that id replaces any `id` attribute on the element.
    /// Comments and raw-text elements are copied as parsed, so markup inside
    /// them never reaches `assign_id`. The output is normalized: tag names
    /// are lowercase, attributes are double-quoted and sorted by name with an
    /// assigned id last, and unclosed tags are closed.
    pub fn render_with_ids<F>(&self, mut assign_id: F) -> String
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut out = String::new();
        write_children(self.html.root_element(), false, &mut assign_id, &mut out);
        out
    }
}

fn write_children<F>(
    element: ElementRef<'_>,
    raw_text: bool,
    assign_id: &mut F,
    out: &mut String,
) where
    F: FnMut(&str) -> Option<String>,
{
    for child in element.children() {
        match child.value() {
            Node::Text(text) if raw_text => out.push_str(text),
            Node::Text(text) => escape_text(text, out),
            Node::Comment(comment) => {
                out.push_str("<!--");
                out.push_str(comment);
                out.push_str("-->");
            }
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    write_element(child, assign_id, out);
                }
            }
            _ => {}
        }
    }
}

fn write_element<F>(element: ElementRef<'_>, assign_id: &mut F, out: &mut String)
where
    F: FnMut(&str) -> Option<String>,
{
    let name = element.value().name();
    let id = assign_id(name);

    out.push('<');
    out.push_str(name);
    let mut attrs = element
        .value()
        .attrs()
        .filter(|(attr, _)| id.is_none() || *attr != "id")
        .collect::<Vec<_>>();
    attrs.sort_by_key(|(attr, _)| *attr);
    for (attr, value) in attrs {
        write_attribute(attr, value, out);
    }
    if let Some(id) = &id {
        write_attribute("id", id, out);
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&name) {
        return;
    }

    write_children(element, RAW_TEXT_ELEMENTS.contains(&name), assign_id, out);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn write_attribute(name: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
    out.push('"');
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
}

/// Strips markup from an HTML fragment and returns its text content
pub fn strip_html(content: &str) -> String {
    ContentDocument::parse(content).text()
}
