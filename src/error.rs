// src/error.rs
use thiserror::Error;

/// Everything that can go wrong between the outbound GET and a finished record.
///
/// None of these reach the caller of [`crate::service::DailyText::get_today`];
/// they are logged and swapped for the fallback record there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// Non-success status or transport failure.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// Document retrieved but no table region in it.
    #[error("parse failed: {0}")]
    Parse(String),

    /// Unexpected failure while splitting or classifying lines.
    #[error("classification failed: {0}")]
    Classification(String),
}

impl From<reqwest::Error> for ExtractError {
    fn from(e: reqwest::Error) -> Self {
        ExtractError::Fetch(e.to_string())
    }
}
