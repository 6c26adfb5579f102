// src/bin/serve.rs
use std::sync::Arc;

use jft_scrape::config::Options;
use jft_scrape::service::DailyText;
use jft_scrape::{logf, server};
use log::LevelFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options::from_env()?;
    jft_scrape::log::init(opts.log_file.as_deref(), LevelFilter::Info)?;

    // The blocking HTTP client is built (and dropped) outside the async runtime.
    let daily = Arc::new(DailyText::from_options(&opts)?);
    logf!("Serving {} from {}", daily.url(), opts.bind);

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    rt.block_on(server::serve(&opts, Arc::clone(&daily)))
}
