// src/core/html.rs
// Low-level HTML string helpers, tailored to the JFT page: one table,
// text separated by <br>. Tag names match ASCII case-insensitively.

use crate::config::consts::{TABLE_CLOSE, TABLE_OPEN};

/// ASCII-only lowercasing. Byte offsets stay valid against the input.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Find the section between an opening tag (with attributes) and the first closing tag
/// after it, case-insensitive. Returns the HTML *inside* the tags.
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    let lc = to_lower(s);
    let open = to_lower(open_pat);
    let close = to_lower(close_pat);

    let o = lc.find(&open)?;
    // Jump past the '>' of the opening tag
    let after = s[o..].find('>')? + o + 1;
    let cr = lc[after..].find(&close)?;
    Some(&s[after..after + cr])
}

/// Inner HTML of the first `<table ...>...</table>` region.
pub fn first_table(doc: &str) -> Option<&str> {
    slice_between_ci(doc, TABLE_OPEN, TABLE_CLOSE)
}

/// Replace `<br>`, `<br/>`, `<br />` (any case) with `\n`.
pub fn br_to_newlines(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(lt) = rest.find('<') {
        out.push_str(&rest[..lt]);
        let tail = &rest[lt..];
        match br_tag_len(tail) {
            Some(n) => {
                out.push('\n');
                rest = &tail[n..];
            }
            None => {
                out.push('<');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

// `tail` starts with '<'. Length of the br tag there, if any.
fn br_tag_len(tail: &str) -> Option<usize> {
    let b = tail.as_bytes();
    if b.len() < 4 || !b[1].eq_ignore_ascii_case(&b'b') || !b[2].eq_ignore_ascii_case(&b'r') {
        return None;
    }
    let after = &tail[3..];
    let mut i = tail.len() - after.trim_start().len();
    if tail[i..].starts_with('/') {
        i += 1;
    }
    tail[i..].starts_with('>').then_some(i + 1)
}

/// Remove every `<...>` tag with at least one character inside.
/// A lone `<` (or `<>`) is kept as text. Whitespace is left untouched.
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(lt) = rest.find('<') {
        out.push_str(&rest[..lt]);
        let tail = &rest[lt..];
        match tail[1..].find('>') {
            Some(gt) if gt > 0 => rest = &tail[gt + 2..],
            _ => {
                out.push('<');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
