// src/cli.rs
use std::{env, path::PathBuf, time::Duration};

use ::log::LevelFilter;

use crate::config::Options;
use crate::error::ExtractError;
use crate::record::{today_label, MeditationRecord};
use crate::service::DailyText;
use crate::store;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub opts: Options,
    pub pretty: bool,
    pub no_cache: bool,
    pub strict: bool,
    pub verbose: bool,
}

impl CliArgs {
    pub fn new(opts: Options) -> Self {
        Self { opts, pretty: false, no_cache: false, strict: false, verbose: false }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Fetch(CliArgs),
    Help,
}

/// Entry point for the `jft` binary. Returns the process exit code.
pub fn run() -> Result<i32, Box<dyn std::error::Error>> {
    let base = Options::from_env()?;
    let args = match parse_args(env::args().skip(1), base)? {
        Command::Help => {
            eprintln!("{}", include_str!("cli_help.txt"));
            return Ok(0);
        }
        Command::Fetch(args) => args,
    };

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    crate::log::init(args.opts.log_file.as_deref(), level)?;

    let record = fetch_record(&args);
    let json = if args.pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    println!("{json}");

    Ok(exit_code(&args, &record))
}

/// 2 for a fallback under `--strict`, else 0.
pub fn exit_code(args: &CliArgs, record: &MeditationRecord) -> i32 {
    if args.strict && record.is_fallback() { 2 } else { 0 }
}

/// Snapshot first (unless `--no-cache`), then a live fetch. Never fails:
/// anything that goes wrong ends in the fallback record.
pub fn fetch_record(args: &CliArgs) -> MeditationRecord {
    fetch_record_with(args, || DailyText::from_options(&args.opts))
}

/// [`fetch_record`] with the service built by `make`, only when the snapshot misses.
pub fn fetch_record_with<F>(args: &CliArgs, make: F) -> MeditationRecord
where
    F: FnOnce() -> Result<DailyText, ExtractError>,
{
    let dir = &args.opts.store_dir;
    let url = &args.opts.url;

    if !args.no_cache {
        if let Some(hit) = store::load_fresh(dir, url, args.opts.cache_ttl) {
            logd!("CLI: using snapshot in {}", dir.display());
            return hit;
        }
    }

    let record = match make() {
        Ok(service) => service.get_today(),
        Err(e) => {
            loge!("CLI: could not build service: {}", e);
            MeditationRecord::fallback(today_label())
        }
    };

    if record.success && !args.no_cache {
        if let Err(e) = store::save(dir, url, &record) {
            logw!("CLI: could not write snapshot: {}", e);
        }
    }
    record
}

pub fn parse_args<I>(args: I, base: Options) -> Result<Command, Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut out = CliArgs::new(base);
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" => out.opts.url = args.next().ok_or("Missing value for --url")?,
            "--pretty" => out.pretty = true,
            "--no-cache" => out.no_cache = true,
            "--store" => {
                out.opts.store_dir = PathBuf::from(args.next().ok_or("Missing value for --store")?);
            }
            "--ttl" => {
                let v: u64 = args.next().ok_or("Missing value for --ttl")?.parse()?;
                out.opts.cache_ttl = Duration::from_secs(v);
            }
            "--strict" => out.strict = true,
            "--log-file" => {
                out.opts.log_file = Some(PathBuf::from(args.next().ok_or("Missing value for --log-file")?));
            }
            "-v" | "--verbose" => out.verbose = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if out.opts.url.trim().is_empty() {
        return Err("URL must not be empty".into());
    }
    Ok(Command::Fetch(out))
}
