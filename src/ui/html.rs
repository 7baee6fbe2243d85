/// Replaces `& < > " '` with their HTML entities.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Paragraph shown in place of a list or table that has nothing to show.
pub fn placeholder(message: &str) -> String {
    format!("<p class=\"placeholder\">{}</p>", escape_html(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_every_special_character() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escaped_output_has_no_raw_markup() {
        let inputs = ["<script>alert('x')</script>", "\"'&<>", "a&&b", "''\"\"", "plain text", ""];
        for input in inputs {
            let escaped = escape_html(input);
            assert!(!escaped.contains('<'));
            assert!(!escaped.contains('>'));
            assert!(!escaped.contains('"'));
            assert!(!escaped.contains('\''));
            // every remaining ampersand starts an entity
            for (index, _) in escaped.match_indices('&') {
                let rest = &escaped[index..];
                assert!(
                    ["&amp;", "&lt;", "&gt;", "&quot;", "&#039;"]
                        .iter()
                        .any(|e| rest.starts_with(e)),
                    "bare ampersand in {:?}",
                    escaped
                );
            }
        }
    }

    #[test]
    fn test_does_not_double_escape_plain_text() {
        assert_eq!(escape_html("Paldium Fragment"), "Paldium Fragment");
        assert_eq!(escape_html("日本語"), "日本語");
    }

    #[test]
    fn test_placeholder_is_escaped() {
        assert_eq!(placeholder("No <data>"), "<p class=\"placeholder\">No &lt;data&gt;</p>");
    }
}
