use crate::parsers::text;

#[test]
fn test_count_words_empty() {
    assert_eq!(text::count_words(""), 0);
    assert_eq!(text::count_words("   \n\t  "), 0);
}

#[test]
fn test_count_words_mixed_whitespace() {
    assert_eq!(text::count_words("  one\ttwo\n\nthree   four "), 4);
}

#[test]
fn test_count_words_keeps_punctuation_attached() {
    assert_eq!(text::count_words("Hello, world! This is a test."), 6);
}

#[test]
fn test_count_words_non_breaking_space() {
    assert_eq!(text::count_words("møte\u{a0}referat"), 2);
}

#[test]
fn test_count_words_byte_order_mark_separates() {
    assert_eq!(text::count_words("a\u{feff}b"), 2);
    assert_eq!(text::count_words("\u{feff}a b\u{feff}"), 2);
}

#[test]
fn test_count_words_next_line_does_not_separate() {
    assert_eq!(text::count_words("a\u{85}b"), 1);
}

#[test]
fn test_editor_whitespace_set() {
    for c in [
        ' ', '\t', '\n', '\u{b}', '\u{c}', '\r', '\u{a0}', '\u{1680}', '\u{2000}', '\u{200a}',
        '\u{2028}', '\u{2029}', '\u{202f}', '\u{205f}', '\u{3000}', '\u{feff}',
    ] {
        assert!(text::is_editor_whitespace(c), "{:?} should be whitespace", c);
    }
    for c in ['a', '-', '\u{85}', '\u{200b}', '\u{180e}'] {
        assert!(!text::is_editor_whitespace(c), "{:?} should not be whitespace", c);
    }
}

#[test]
fn test_utf16_len() {
    assert_eq!(text::utf16_len(""), 0);
    assert_eq!(text::utf16_len("Møter på Østlandet"), 18);
    // Astral-plane characters take two code units
    assert_eq!(text::utf16_len("🚀"), 2);
}
