//! URL slug generation for article titles and category names.

use crate::parsers::text::{EDITOR_WHITESPACE_CLASS, is_editor_whitespace};
use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static RE_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("[^a-z0-9{}-]", EDITOR_WHITESPACE_CLASS)).unwrap());
static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("[{}]+", EDITOR_WHITESPACE_CLASS)).unwrap());
static RE_HYPHENS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

/// Combining Diacritical Marks block
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Turns free text into a lowercase, hyphenated, URL-safe slug.
///
/// Accents are removed after canonical decomposition, and the Norwegian
/// letters that do not decompose are spelled out (`æ` becomes `ae`, `ø`
/// becomes `o`). Applying the function to its own output returns it unchanged.
///
/// ```
/// use article_seo::generate_slug;
///
/// assert_eq!(generate_slug("Møter på Østlandet"), "moter-pa-ostlandet");
/// assert_eq!(generate_slug("  Hello,   World!  "), "hello-world");
/// ```
pub fn generate_slug(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    let mapped = stripped
        .replace('æ', "ae")
        .replace('ø', "o")
        .replace('å', "a");

    let cleaned = RE_DISALLOWED.replace_all(&mapped, "");
    let hyphenated = RE_WHITESPACE.replace_all(cleaned.trim_matches(is_editor_whitespace), "-");
    RE_HYPHENS.replace_all(&hyphenated, "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_simple() {
        assert_eq!(generate_slug("Hello World"), "hello-world");
    }

    #[test]
    fn slug_norwegian_letters() {
        assert_eq!(generate_slug("Møter på Østlandet"), "moter-pa-ostlandet");
        assert_eq!(generate_slug("Blåbærsyltetøy"), "blabaersyltetoy");
        assert_eq!(generate_slug("ÆRLIG TALT"), "aerlig-talt");
    }

    #[test]
    fn slug_strips_accents() {
        assert_eq!(generate_slug("Café Crème Brûlée"), "cafe-creme-brulee");
    }

    #[test]
    fn slug_drops_characters_without_ascii_form() {
        // ß is not decomposable and not mapped
        assert_eq!(generate_slug("Straße"), "strae");
        assert_eq!(generate_slug("日本語"), "");
    }

    #[test]
    fn slug_removes_punctuation() {
        assert_eq!(generate_slug("AI: Hva nå? (del 2)"), "ai-hva-na-del-2");
    }

    #[test]
    fn slug_collapses_whitespace_and_hyphens() {
        assert_eq!(generate_slug("a   b\t\nc"), "a-b-c");
        assert_eq!(generate_slug("a - b -- c"), "a-b-c");
        assert_eq!(generate_slug("  padded  "), "padded");
    }

    #[test]
    fn slug_keeps_edge_hyphens() {
        assert_eq!(generate_slug("-leading and trailing-"), "-leading-and-trailing-");
    }

    #[test]
    fn slug_empty() {
        assert_eq!(generate_slug(""), "");
        assert_eq!(generate_slug("   "), "");
        assert_eq!(generate_slug("!!!"), "");
    }

    #[test]
    fn slug_combining_marks_after_norwegian_letters() {
        assert_eq!(generate_slug("\u{e6}\u{301}re"), "aere");
        assert_eq!(generate_slug("\u{1fd} \u{1ff}"), "ae-o");
        assert_eq!(generate_slug("o\u{308}l"), "ol");
    }

    #[test]
    fn slug_editor_whitespace() {
        assert_eq!(generate_slug("a\u{feff}b"), "a-b");
        assert_eq!(generate_slug("\u{feff}a b\u{feff}"), "a-b");
        // NEXT LINE is not whitespace for the editor and is dropped
        assert_eq!(generate_slug("a\u{85}b"), "ab");
        assert_eq!(generate_slug("a\u{3000}\u{2028}b"), "a-b");
    }

    #[test]
    fn slug_is_idempotent() {
        let fragments = [
            "Møter på Østlandet",
            "  Hello,   World!  ",
            "a - b -- c",
            "-leading and trailing-",
            "Café Crème Brûlée",
            "Straße 42 / Oslo",
            "\u{85}",
            "\u{feff}",
            "\u{a0}-\u{a0}",
            "æ\u{301}",
            "ø\u{308}\u{301}",
            "Å\u{30a}",
            "- \t-\n -",
            "--",
            "İstanbul",
            "日本語",
            "",
        ];

        let mut inputs: Vec<String> = fragments.iter().map(|f| f.to_string()).collect();
        for a in &fragments {
            for b in &fragments {
                inputs.push(format!("{}{}", a, b));
                inputs.push(format!("{} {}", a, b));
            }
        }

        for input in &inputs {
            let once = generate_slug(input);
            assert_eq!(generate_slug(&once), once, "input {:?}", input);
            assert!(
                once.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "slug {:?} for input {:?}",
                once,
                input
            );
            assert!(!once.contains("--"), "slug {:?} for input {:?}", once, input);
        }
    }
}
