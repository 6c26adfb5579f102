// tests/common/mod.rs
//
// Shared fixtures: a JFT-shaped page and canned fetchers.
//
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use jft_scrape::core::Fetcher;
use jft_scrape::ExtractError;

pub const SAMPLE_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>Just For Today</title></head>
<body>
<div class="nav"><a href="/">Home</a></div>
<table align="center" width="100%">
  <tr><td align="left">June 5, Page 162</td></tr>
  <tr><td align="center"><h1>Daily Reflections</h1></td></tr>
  <tr><td><i>&quot;Keep coming back.&quot;</i><br/>Basic Text, p. 86</td></tr>
  <tr><td>We came to NA &amp; found hope.<br>
      It&#39;s one day at a time.&nbsp;</td></tr>
  <tr><td><b>Just for today:</b> I will be grateful.</td></tr>
</table>
<table><tr><td>Copyright footer</td></tr></table>
</body></html>
"#;

/// Wrap plain text lines (joined by `\n`) in a minimal page.
pub fn page_with_table(text: &str) -> String {
    format!("<html><body><table>{}</table></body></html>", text.replace('\n', "<br>"))
}

/// Returns the same document every time and counts calls.
#[derive(Clone)]
pub struct StaticFetcher {
    body: String,
    pub calls: Arc<AtomicUsize>,
}

impl StaticFetcher {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into(), calls: Arc::new(AtomicUsize::new(0)) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Fetcher for StaticFetcher {
    fn fetch(&self, _url: &str) -> Result<String, ExtractError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.body.clone())
    }
}

/// Always answers with an HTTP status failure.
pub struct StatusFetcher(pub u16);

impl Fetcher for StatusFetcher {
    fn fetch(&self, url: &str) -> Result<String, ExtractError> {
        Err(ExtractError::Fetch(format!("HTTP error: {} {}", self.0, url)))
    }
}
