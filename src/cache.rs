// src/cache.rs
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// A single value remembered for `ttl`. A zero `ttl` disables caching.
pub struct TtlCache<T> {
    ttl: Duration,
    slot: Mutex<Option<(Instant, T)>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, slot: Mutex::new(None) }
    }

    /// A copy of the stored value if it is younger than the ttl.
    pub fn get(&self) -> Option<T> {
        self.get_at(Instant::now())
    }

    pub fn get_at(&self, now: Instant) -> Option<T> {
        let slot = self.slot.lock().ok()?;
        match &*slot {
            Some((stored, value)) if now.saturating_duration_since(*stored) < self.ttl => {
                Some(value.clone())
            }
            _ => None,
        }
    }

    pub fn put(&self, value: T) {
        self.put_at(Instant::now(), value);
    }

    pub fn put_at(&self, now: Instant, value: T) {
        if self.ttl.is_zero() {
            return;
        }
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some((now, value));
        }
    }

    pub fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}
