// src/core/net.rs
// Outbound HTTP GET. The `Fetcher` trait is the seam between the network
// and the pure extractor; tests plug in canned documents.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::Options;
use crate::error::ExtractError;

pub trait Fetcher: Send + Sync {
    /// GET `url` and return the body. Non-2xx is an error.
    fn fetch(&self, url: &str) -> Result<String, ExtractError>;
}

/// Blocking reqwest client with the configured user agent and timeout.
/// Must not be called from inside an async task; the server goes through `spawn_blocking`.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, ExtractError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Use a caller-built client as is.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub fn from_options(opts: &Options) -> Result<Self, ExtractError> {
        Self::new(&opts.user_agent, opts.timeout)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, ExtractError> {
        logd!("HTTP GET {}", url);
        let resp = self.client.get(url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ExtractError::Fetch(format!("HTTP error: {} {}", status, url)));
        }

        let body = resp.text()?;
        logd!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
