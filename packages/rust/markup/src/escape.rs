//! Entity escaping and markup-name rules.
//!
//! Escaped output is valid both as HTML and as XML 1.0 character data.

use std::borrow::Cow;
use std::io::Write;
use std::sync::LazyLock;

use regex::Regex;

/// HTML elements that may never have content.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Whether `name` is a legal element or attribute name.
pub(crate) fn is_valid_name(name: &str) -> bool {
    static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z_:][A-Za-z0-9_:.\-]*$").expect("valid regex")
    });

    NAME_RE.is_match(name)
}

/// Whether `tag` is an HTML void element (case-insensitive).
pub(crate) fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

/// Whether `c` may appear in an XML 1.0 document.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Replacement for `c`, if it cannot be written as-is.
///
/// Characters XML forbids outright (most C0 controls, U+FFFE, U+FFFF) have no
/// entity form and become U+FFFD.
fn entity(c: char, in_attribute: bool) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' if in_attribute => Some("&quot;"),
        c if !is_xml_char(c) => Some("\u{FFFD}"),
        _ => None,
    }
}

/// Write `text` to `out`, replacing markup-significant characters as it goes.
///
/// Unescaped runs are written as slices, so plain text costs one write.
pub(crate) fn write_escaped<W: Write + ?Sized>(
    out: &mut W,
    text: &str,
    in_attribute: bool,
) -> std::io::Result<()> {
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if let Some(rep) = entity(c, in_attribute) {
            out.write_all(text[start..i].as_bytes())?;
            out.write_all(rep.as_bytes())?;
            start = i + c.len_utf8();
        }
    }
    out.write_all(text[start..].as_bytes())
}

fn escape(text: &str, in_attribute: bool) -> Cow<'_, str> {
    if !text.chars().any(|c| entity(c, in_attribute).is_some()) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match entity(c, in_attribute) {
            Some(rep) => escaped.push_str(rep),
            None => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Escape text content: `&`, `<` and `>`.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    escape(text, false)
}

/// Escape an attribute value: `&`, `<`, `>` and `"`.
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    escape(value, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert!(is_valid_name("div"));
        assert!(is_valid_name("h1"));
        assert!(is_valid_name("data-entry-id"));
        assert!(is_valid_name("xml:lang"));
        assert!(is_valid_name("_private"));

        assert!(!is_valid_name(""));
        assert!(!is_valid_name("1div"));
        assert!(!is_valid_name("-x"));
        assert!(!is_valid_name("a b"));
        assert!(!is_valid_name("a>"));
        assert!(!is_valid_name("a\"b"));
        assert!(!is_valid_name("p/"));
    }

    #[test]
    fn void_elements() {
        assert!(is_void_element("br"));
        assert!(is_void_element("IMG"));
        assert!(!is_void_element("div"));
        assert!(!is_void_element("script"));
    }

    #[test]
    fn text_escaping_leaves_quotes() {
        assert_eq!(escape_text("A & B"), "A &amp; B");
        assert_eq!(escape_text("<b>\"hi\"</b>"), "&lt;b&gt;\"hi\"&lt;/b&gt;");
    }

    #[test]
    fn attribute_escaping_covers_quotes() {
        assert_eq!(escape_attribute("say \"hi\" & <go>"), "say &quot;hi&quot; &amp; &lt;go&gt;");
    }

    #[test]
    fn illegal_xml_chars_are_replaced() {
        assert_eq!(escape_text("a\u{1}b\u{FFFF}"), "a\u{FFFD}b\u{FFFD}");
        assert_eq!(escape_attribute("\u{0}\u{1F}"), "\u{FFFD}\u{FFFD}");
        assert_eq!(escape_text("tab\tnl\ncr\r"), "tab\tnl\ncr\r");
        assert_eq!(escape_text("\u{10348} \u{E000}"), "\u{10348} \u{E000}");
    }

    #[test]
    fn clean_input_is_borrowed() {
        assert!(matches!(escape_text("plain words"), Cow::Borrowed(_)));
        assert!(matches!(escape_attribute("it's fine"), Cow::Borrowed(_)));
    }

    #[test]
    fn streaming_matches_buffered() {
        let input = "ünïcode & <tags> \"quoted\" ✓";
        let mut out = Vec::new();
        write_escaped(&mut out, input, true).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), escape_attribute(input));
    }
}
