// src/core/sanitize.rs

const NAMED_ENTITIES: &[(&str, char)] = &[
    ("&nbsp;", ' '),
    ("&quot;", '"'),
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
];

/// Decode the named entities above plus decimal `&#NNN;` in one left-to-right pass.
/// Decoded output is never rescanned, so `&amp;amp;` yields `&amp;`.
/// Numeric entities that name no valid char are kept verbatim.
pub fn decode_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match named_entity(tail).or_else(|| numeric_entity(tail)) {
            Some((ch, len)) => {
                out.push(ch);
                rest = &tail[len..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn named_entity(tail: &str) -> Option<(char, usize)> {
    NAMED_ENTITIES
        .iter()
        .find(|(name, _)| tail.starts_with(name))
        .map(|(name, ch)| (*ch, name.len()))
}

fn numeric_entity(tail: &str) -> Option<(char, usize)> {
    let body = tail.strip_prefix("&#")?;
    let digits = body.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || !body[digits..].starts_with(';') {
        return None;
    }
    let code: u32 = body[..digits].parse().ok()?;
    let ch = char::from_u32(code)?;
    Some((ch, 2 + digits + 1))
}

// U+FEFF counts as blank, same as a browser's `String.prototype.trim`.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Split on `\n`, trim every line, drop the empty ones.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.trim_matches(is_blank))
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named() {
        assert_eq!(
            decode_entities("a&nbsp;b &quot;q&quot; &lt;tag&gt; x&amp;y"),
            "a b \"q\" <tag> x&y"
        );
    }

    #[test]
    fn single_pass() {
        assert_eq!(decode_entities("&amp;amp;"), "&amp;");
        assert_eq!(decode_entities("&amp;#39;"), "&#39;");
    }

    #[test]
    fn numeric() {
        assert_eq!(decode_entities("It&#39;s &#8220;ok&#8221;"), "It's \u{201c}ok\u{201d}");
        assert_eq!(decode_entities("&#55296;"), "&#55296;"); // lone surrogate
        assert_eq!(decode_entities("&#99999999999;"), "&#99999999999;");
        assert_eq!(decode_entities("&#x41; &#; &"), "&#x41; &#; &");
    }

    #[test]
    fn entity_names_are_case_sensitive() {
        assert_eq!(decode_entities("&AMP; &Nbsp;"), "&AMP; &Nbsp;");
    }

    #[test]
    fn lines_trimmed_and_filtered() {
        let got = split_lines("  June 5 \r\n\n\t\n Title\n\u{a0}\nLast  ");
        assert_eq!(got, vec!["June 5", "Title", "Last"]);
        assert!(split_lines(" \n\n  ").is_empty());
    }

    #[test]
    fn byte_order_mark_is_blank() {
        assert_eq!(split_lines("a\n\u{feff}\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("\u{feff}June 5 \u{feff}"), vec!["June 5"]);
    }
}
