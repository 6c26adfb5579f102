// src/config/options.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// Runtime settings shared by the server and the CLI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub url: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub cache_ttl: Duration,
    pub bind: String,
    pub store_dir: PathBuf,
    pub log_file: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: s!(JFT_URL),
            user_agent: s!(USER_AGENT),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            cache_ttl: Duration::from_secs(CACHE_TTL_SECS),
            bind: s!(BIND_ADDR),
            store_dir: PathBuf::from(STORE_DIR),
            log_file: None,
        }
    }
}

impl Options {
    /// Defaults, overridden by any `JFT_*` variables present in the process environment.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Options::from_env`] but reads variables through `get`.
    pub fn from_lookup<F>(get: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(v) = get(ENV_URL) { opts.url = v; }
        if let Some(v) = get(ENV_USER_AGENT) { opts.user_agent = v; }
        if let Some(v) = get(ENV_TIMEOUT) {
            let secs: u64 = v.trim().parse()
                .map_err(|e| format!("Invalid {}={:?}: {}", ENV_TIMEOUT, v, e))?;
            opts.timeout = Duration::from_secs(secs);
        }
        if let Some(v) = get(ENV_CACHE_TTL) {
            let secs: u64 = v.trim().parse()
                .map_err(|e| format!("Invalid {}={:?}: {}", ENV_CACHE_TTL, v, e))?;
            opts.cache_ttl = Duration::from_secs(secs);
        }
        if let Some(v) = get(ENV_BIND) { opts.bind = v; }
        if let Some(v) = get(ENV_STORE_DIR) { opts.store_dir = PathBuf::from(v); }
        if let Some(v) = get(ENV_LOG_FILE) {
            if !v.trim().is_empty() { opts.log_file = Some(PathBuf::from(v)); }
        }

        Ok(opts)
    }

    /// `Cache-Control` value advertised alongside a served record.
    pub fn cache_control(&self) -> String {
        format!("public, max-age={}", self.cache_ttl.as_secs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (s!(*k), s!(*v)))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let opts = Options::from_lookup(lookup(&[])).unwrap();
        assert_eq!(opts, Options::default());
        assert_eq!(opts.url, JFT_URL);
        assert_eq!(opts.cache_ttl, Duration::from_secs(3600));
    }

    #[test]
    fn overrides_are_applied() {
        let opts = Options::from_lookup(lookup(&[
            (ENV_URL, "http://127.0.0.1:9/jft/"),
            (ENV_CACHE_TTL, "60"),
            (ENV_BIND, "0.0.0.0:8080"),
            (ENV_LOG_FILE, ""),
        ]))
        .unwrap();
        assert_eq!(opts.url, "http://127.0.0.1:9/jft/");
        assert_eq!(opts.cache_ttl, Duration::from_secs(60));
        assert_eq!(opts.bind, "0.0.0.0:8080");
        assert_eq!(opts.log_file, None);
        assert_eq!(opts.cache_control(), "public, max-age=60");
    }

    #[test]
    fn bad_number_is_an_error() {
        assert!(Options::from_lookup(lookup(&[(ENV_TIMEOUT, "soon")])).is_err());
    }
}
