// src/store.rs
// Last good record on disk, so short-lived CLI runs share the one-hour cache.
use std::{fs, path::{Path, PathBuf}, time::{Duration, SystemTime}};

use serde::{Deserialize, Serialize};

use crate::config::consts::STORE_FILE;
use crate::record::MeditationRecord;

/// A stored record and the page it was extracted from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub url: String,
    pub record: MeditationRecord,
}

pub fn snapshot_path(dir: &Path) -> PathBuf {
    dir.join(STORE_FILE)
}

pub fn save(
    dir: &Path,
    url: &str,
    record: &MeditationRecord,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir)?;
    }
    let p = snapshot_path(dir);
    let snap = Snapshot { url: s!(url), record: record.clone() };
    fs::write(&p, serde_json::to_string_pretty(&snap)?)?;
    Ok(p)
}

/// The stored snapshot, or `None` when none exists yet.
pub fn load(dir: &Path) -> Result<Option<Snapshot>, Box<dyn std::error::Error>> {
    let p = snapshot_path(dir);
    if !p.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(&p)?;
    Ok(Some(serde_json::from_str(&text)?))
}

/// The stored record if it came from `url`, was written less than `ttl` ago,
/// and is not a fallback.
pub fn load_fresh(dir: &Path, url: &str, ttl: Duration) -> Option<MeditationRecord> {
    load_fresh_at(dir, url, ttl, SystemTime::now())
}

pub fn load_fresh_at(
    dir: &Path,
    url: &str,
    ttl: Duration,
    now: SystemTime,
) -> Option<MeditationRecord> {
    if ttl.is_zero() {
        return None;
    }
    let mtime = fs::metadata(snapshot_path(dir)).ok()?.modified().ok()?;
    // mtime in the future counts as just written
    let age = now.duration_since(mtime).unwrap_or_default();
    if age >= ttl {
        logd!("Store: snapshot is {}s old, stale", age.as_secs());
        return None;
    }
    match load(dir) {
        Ok(Some(snap)) if snap.url != url => {
            logd!("Store: snapshot is for {}, not {}", snap.url, url);
            None
        }
        Ok(Some(snap)) if snap.record.success => Some(snap.record),
        Ok(_) => None,
        Err(e) => {
            logw!("Store: unreadable snapshot: {}", e);
            None
        }
    }
}
