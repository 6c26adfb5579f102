// src/record.rs
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::config::consts::*;

/// The daily reading, in the JSON shape served at `/api/jft`:
/// `{ date, title, quote, content, reflection, success }`.
///
/// Built fresh per extraction and handed out by value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeditationRecord {
    pub date: String,
    pub title: String,
    pub quote: String,
    #[serde(rename = "content", default)]
    pub body: Vec<String>,
    pub reflection: String,
    pub success: bool,
}

impl MeditationRecord {
    /// The fixed substitute payload used whenever fetching or parsing fails.
    pub fn fallback(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            title: s!(FALLBACK_TITLE),
            quote: s!(FALLBACK_QUOTE),
            body: vec![s!(FALLBACK_CONTENT)],
            reflection: s!(FALLBACK_REFLECTION),
            success: false,
        }
    }

    pub fn is_fallback(&self) -> bool {
        !self.success
    }
}

/// Today's date as "Month Day" in local time, e.g. "October 18".
pub fn today_label() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}
