//! Whitespace tokenisation of plain text.

/// Whitespace as the editor's browser runtime defines it.
///
/// This is Unicode `White_Space` minus U+0085 (NEXT LINE) plus U+FEFF
/// (ZERO WIDTH NO-BREAK SPACE). Word counts and slugs must split on exactly
/// this set to reproduce stored scores.
pub fn is_editor_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Character-class body matching [`is_editor_whitespace`], for use inside `[...]`
pub const EDITOR_WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Splits text into words on runs of editor whitespace.
///
/// Empty tokens never appear, so leading, trailing and repeated whitespace
/// do not produce words.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_editor_whitespace).filter(|word| !word.is_empty())
}

/// Number of words in the text
pub fn count_words(text: &str) -> usize {
    words(text).count()
}

/// Length of a string in UTF-16 code units.
///
/// Title and description limits are expressed in this unit, matching what a
/// browser-based editor reports as the string length.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}
