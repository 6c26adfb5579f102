// src/extract/classify.rs
use crate::config::consts::{
    DEFAULT_QUOTE, DEFAULT_REFLECTION, DEFAULT_TITLE, HEADER_LINES, REFLECTION_PREFIX,
};
use crate::error::ExtractError;
use crate::record::MeditationRecord;

/// Turns the cleaned table lines into a record.
///
/// `today` is the date label to use when the page gives none.
pub trait Classifier: Send + Sync {
    fn classify(&self, lines: &[String], today: &str) -> Result<MeditationRecord, ExtractError>;
}

/// The layout the JFT page has used for years:
///
/// ```text
/// 0  date
/// 1  title
/// 2  quote
/// 3… body paragraphs
/// n  "Just for today: ..." reflection
/// ```
///
/// Without a marker line after the body, the last line is taken as the reflection.
#[derive(Clone, Copy, Debug, Default)]
pub struct PositionalClassifier;

impl Classifier for PositionalClassifier {
    fn classify(&self, lines: &[String], today: &str) -> Result<MeditationRecord, ExtractError> {
        let date = lines.first().cloned().unwrap_or_else(|| s!(today));
        let title = lines.get(1).cloned().unwrap_or_else(|| s!(DEFAULT_TITLE));
        let quote = lines.get(2).cloned().unwrap_or_else(|| s!(DEFAULT_QUOTE));
        let (body, reflection) = split_body(lines);

        Ok(MeditationRecord { date, title, quote, body, reflection, success: true })
    }
}

fn split_body(lines: &[String]) -> (Vec<String>, String) {
    let n = lines.len();
    match find_reflection(lines) {
        Some(idx) if idx > HEADER_LINES => {
            let reflection = strip_reflection_prefix(&lines[idx]);
            let reflection = if reflection.is_empty() { s!(DEFAULT_REFLECTION) } else { s!(reflection) };
            (lines[HEADER_LINES..idx].to_vec(), reflection)
        }
        // Marker missing or inside the header: last line stands in, even if it isn't one.
        _ if n > HEADER_LINES => (lines[HEADER_LINES..n - 1].to_vec(), lines[n - 1].clone()),
        _ => (Vec::new(), s!(DEFAULT_REFLECTION)),
    }
}

fn starts_with_ci(line: &str, prefix: &str) -> bool {
    line.len() >= prefix.len()
        && line.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Index of the first line starting with "just for today:", any case.
pub fn find_reflection(lines: &[String]) -> Option<usize> {
    lines.iter().position(|l| starts_with_ci(l, REFLECTION_PREFIX))
}

/// Drop the "Just for today:" label and the whitespace after it.
pub fn strip_reflection_prefix(line: &str) -> &str {
    if starts_with_ci(line, REFLECTION_PREFIX) {
        line[REFLECTION_PREFIX.len()..].trim_start()
    } else {
        line
    }
}
