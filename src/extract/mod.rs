// src/extract/mod.rs
//! Pure HTML → [`MeditationRecord`] extraction. No network here; see
//! [`crate::service`] for the fetch/cache/fallback wrapper.

mod classify;

pub use classify::{find_reflection, strip_reflection_prefix, Classifier, PositionalClassifier};

use crate::core::{html, sanitize};
use crate::error::ExtractError;
use crate::record::{today_label, MeditationRecord};

/// Plain-text lines of the first table: `<br>` becomes a line break, other tags go,
/// entities are decoded, lines are trimmed and empties dropped.
pub fn table_lines(doc: &str) -> Result<Vec<String>, ExtractError> {
    let table = html::first_table(doc)
        .ok_or_else(|| ExtractError::Parse(s!("Could not find content table")))?;

    let text = sanitize::decode_entities(&html::strip_tags(&html::br_to_newlines(table)));
    Ok(sanitize::split_lines(&text))
}

/// Extract with the positional layout, dating pages that lack a date line with today.
pub fn extract(doc: &str) -> Result<MeditationRecord, ExtractError> {
    extract_with(doc, &PositionalClassifier, &today_label())
}

pub fn extract_with<C: Classifier + ?Sized>(
    doc: &str,
    classifier: &C,
    today: &str,
) -> Result<MeditationRecord, ExtractError> {
    let lines = table_lines(doc)?;
    logd!("Extract: {} non-empty lines in table", lines.len());
    classifier.classify(&lines, today)
}
