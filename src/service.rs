// src/service.rs
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;

use crate::cache::TtlCache;
use crate::config::Options;
use crate::core::{Fetcher, HttpFetcher};
use crate::error::ExtractError;
use crate::extract::{extract_with, Classifier, PositionalClassifier};
use crate::record::{today_label, MeditationRecord};

/// "Get today's meditation": fetch, extract, cache, and fall back.
///
/// Callers of [`DailyText::get_today`] always get a well-formed record; a degraded one
/// has `success == false`. Only successful records are cached.
pub struct DailyText {
    fetcher: Box<dyn Fetcher>,
    classifier: Box<dyn Classifier>,
    url: String,
    cache: TtlCache<MeditationRecord>,
}

impl DailyText {
    pub fn new(fetcher: impl Fetcher + 'static, url: impl Into<String>, cache_ttl: Duration) -> Self {
        Self {
            fetcher: Box::new(fetcher),
            classifier: Box::new(PositionalClassifier),
            url: url.into(),
            cache: TtlCache::new(cache_ttl),
        }
    }

    /// Live HTTP fetcher configured from `opts`.
    pub fn from_options(opts: &Options) -> Result<Self, ExtractError> {
        let fetcher = HttpFetcher::from_options(opts)?;
        Ok(Self::new(fetcher, opts.url.clone(), opts.cache_ttl))
    }

    /// Swap the line classification strategy.
    pub fn with_classifier(mut self, classifier: impl Classifier + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn get_today(&self) -> MeditationRecord {
        if let Some(hit) = self.cache.get() {
            logd!("JFT: cache hit ({})", hit.date);
            return hit;
        }

        let today = today_label();
        match self.fetch_and_extract(&today) {
            Ok(record) => {
                logf!("JFT: extracted \"{}\" for {}", record.title, record.date);
                self.cache.put(record.clone());
                record
            }
            Err(e) => {
                loge!("JFT: {}; serving fallback", e);
                MeditationRecord::fallback(today)
            }
        }
    }

    /// One uncached attempt, with the error kept.
    pub fn try_today(&self) -> Result<MeditationRecord, ExtractError> {
        self.fetch_and_extract(&today_label())
    }

    /// Forget the cached record; the next call fetches again.
    pub fn invalidate(&self) {
        self.cache.clear();
    }

    fn fetch_and_extract(&self, today: &str) -> Result<MeditationRecord, ExtractError> {
        let doc = self.fetcher.fetch(&self.url)?;
        let classifier = &*self.classifier;
        panic::catch_unwind(AssertUnwindSafe(|| extract_with(&doc, classifier, today)))
            .unwrap_or_else(|payload| Err(ExtractError::Classification(panic_message(&*payload))))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        s!(*msg)
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        s!("panic during extraction")
    }
}
