use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(["&", "<", ">", "\"", "'"])
        .expect("Failed to build XML escaper")
});

/// Whether `c` may appear in an XML 1.0 document.
#[inline]
fn is_xml_char(c: char) -> bool {
    matches!(c, '\u{9}' | '\u{A}' | '\u{D}' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..)
}

/// Escape XML special characters and drop characters XML 1.0 forbids.
///
/// Generated text occasionally carries stray control characters; a single one
/// would make the whole package unreadable, so they are removed rather than
/// escaped.
///
/// # Examples
///
/// ```
/// use deckhand::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hello\"</tag>"), "&lt;tag&gt;&quot;hello&quot;&lt;/tag&gt;");
/// assert_eq!(escape_xml("bell\u{7}"), "bell");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    let escaped = XML_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"]);
    if escaped.chars().all(is_xml_char) {
        escaped
    } else {
        escaped.chars().filter(|&c| is_xml_char(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_rtl_text_untouched() {
        let hebrew = "וקטורים ומטריצות";
        assert_eq!(escape_xml(hebrew), hebrew);
    }

    #[test]
    fn test_escape_keeps_whitespace_controls() {
        assert_eq!(escape_xml("a\tb\nc\r"), "a\tb\nc\r");
    }

    #[test]
    fn test_escape_drops_forbidden() {
        assert_eq!(escape_xml("x\u{0}y\u{1B}z\u{FFFE}"), "xyz");
    }
}
