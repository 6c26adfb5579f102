// src/lib.rs

#[macro_use]
mod macros;
#[macro_use]
pub mod log;

pub mod cache;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod extract;
pub mod record;
pub mod service;
pub mod store;

#[cfg(feature = "server")]
pub mod server;

pub use error::ExtractError;
pub use extract::{extract, extract_with, Classifier, PositionalClassifier};
pub use record::MeditationRecord;
pub use service::DailyText;

#[doc(hidden)]
pub use ::log as __log;
