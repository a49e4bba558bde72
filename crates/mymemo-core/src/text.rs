//! Text utilities for the SVG quote card: fixed-width wrapping and XML escaping.

/// Wrap text into lines of at most `max_chars` characters.
///
/// This is a character-count wrap, not a word-boundary wrap: characters are
/// accumulated into a line buffer and the buffer is flushed whenever it
/// reaches `max_chars`. CJK text has near-uniform glyph widths, so a fixed
/// character budget per line keeps the card layout stable; space-delimited
/// scripts may be split mid-word.
///
/// Concatenating the returned lines reproduces the input exactly, and the
/// line count is `ceil(char_count / max_chars)`.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    assert!(max_chars > 0, "max_chars must be positive");

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for ch in text.chars() {
        if current_chars >= max_chars {
            lines.push(std::mem::take(&mut current));
            current_chars = 0;
        }
        current.push(ch);
        current_chars += 1;
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Escape the five XML special characters.
///
/// Used for text interpolated into hand-built SVG markup. The apostrophe
/// maps to the named entity `&apos;`, which is valid in XML (unlike HTML 4).
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
