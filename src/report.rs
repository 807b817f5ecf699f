//! Reporting of scan and duplicate results to the log file

use std::{fs::File, io::Write, path::Path, str::FromStr};

use anyhow::{Context, anyhow};
use chrono::Local;
use log::LevelFilter;

use crate::domain::duplicate::DuplicatePair;

const SEPARATOR_WIDTH: usize = 250;

/// Receives the progress and results of a run
pub trait Reporter {
    /// called once the catalog is built, before matching starts
    fn files_to_process(&mut self, count: usize);

    /// opens the section of one artist
    fn artist_header(&mut self, artist: &str);

    fn duplicate(&mut self, pair: &DuplicatePair);
}

/// Writes everything through the `log` facade at info level
#[derive(Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn files_to_process(&mut self, count: usize) {
        log::info!("{count} files to process");
    }

    fn artist_header(&mut self, artist: &str) {
        log::info!("{}", "=".repeat(SEPARATOR_WIDTH));
        log::info!("{}", artist.to_uppercase());
    }

    fn duplicate(&mut self, pair: &DuplicatePair) {
        log::info!("{}", format_pair(pair));
    }
}

/// `(sizes, paths)` of a pair, e.g. `([2.0, 4.0], ["a/b.mp3", "a/c/b.mp3"])`
pub fn format_pair(pair: &DuplicatePair) -> String {
    format!("({:?}, {:?})", pair.sizes, pair.paths)
}

/// Sends all log records to `path`, truncating it.
///
/// `RUST_LOG` takes precedence over `level`.
pub fn init_logger(path: &Path, level: &str) -> anyhow::Result<()> {
    let level =
        LevelFilter::from_str(level).map_err(|_| anyhow!("invalid log level '{level}'"))?;
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{:<5}] | {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .try_init()
        .with_context(|| "Failed to initialize logger")
}
