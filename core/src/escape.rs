//! HTML escaping for user-supplied text.

/// Escape `text` for use in HTML text content and quoted attribute values.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with entities. Every other character,
/// including non-ASCII, passes through unchanged.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Inverse of `escape_html` for the five entities it emits.
    fn decode(escaped: &str) -> String {
        escaped
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&")
    }

    #[test]
    fn escapes_script_tag() {
        assert_eq!(
            escape_html("<script>alert(\"xss\")</script>"),
            "&lt;script&gt;alert(&quot;xss&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn escapes_ampersand_first() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
        assert_eq!(escape_html("Tom & Jerry"), "Tom &amp; Jerry");
    }

    #[test]
    fn escapes_single_quote() {
        assert_eq!(escape_html("it's"), "it&#39;s");
    }

    #[test]
    fn leaves_unicode_alone() {
        assert_eq!(escape_html("café ☕ 日本語"), "café ☕ 日本語");
        assert_eq!(escape_html(""), "");
    }

    proptest! {
        #[test]
        fn output_never_contains_markup_delimiters(input in ".*") {
            let escaped = escape_html(&input);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
            prop_assert!(!escaped.contains('"'));
            prop_assert!(!escaped.contains('\''));
            prop_assert!(!escaped.contains("<script>"));
        }

        #[test]
        fn decoding_restores_the_input(input in "[a-z<>&\"' ]{0,40}|.*") {
            prop_assert_eq!(decode(&escape_html(&input)), input);
        }
    }
}
