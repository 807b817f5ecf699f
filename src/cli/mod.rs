use anyhow::Context;
use clap::Parser;
use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use crate::{
    config::Config,
    library::{Catalog, error::LibraryError},
    matching::{
        DuplicateMatcher, Duplicates,
        aggregate::{ArtistSummary, aggregate},
    },
    report::{self, LogReporter, Reporter},
};

#[derive(Parser)]
#[command(name = "dupsong")]
#[command(version = "0.1")]
#[command(about = "Find duplicate songs in an <artist>/<album>/<song> music folder")]
pub struct Cli {
    /// Root directory of the music library
    pub root: PathBuf,

    /// Path to a config TOML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File receiving the detailed report
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    /// Compare artists in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Print the duplicate pairs as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of one scan of a library
#[derive(Debug)]
pub struct Outcome {
    pub nb_songs: usize,
    pub duplicates: Duplicates,
    pub summary: ArtistSummary,
}

/// Scans `root`, finds duplicates and writes the per-artist report
pub fn detect(
    root: &Path,
    cfg: &Config,
    reporter: &mut dyn Reporter,
) -> Result<Outcome, LibraryError> {
    let catalog = Catalog::build(root, &cfg.scan)?;
    let nb_songs = catalog.nb_songs();
    log::info!("matching {nb_songs} files under {}", catalog.root().display());

    let duplicates = DuplicateMatcher::new(reporter, &cfg.matching).find_duplicates(catalog);
    let summary = aggregate(duplicates.pairs());
    summary.report(reporter);

    Ok(Outcome {
        nb_songs,
        duplicates,
        summary,
    })
}

/// Entrypoint for CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(log_file) = cli.log_file {
        cfg.report.log_file = log_file;
    }
    if cli.parallel {
        cfg.matching.parallel = true;
    }

    report::init_logger(&cfg.report.log_file, &cfg.report.log_level)?;

    let start = Instant::now();

    let outcome = detect(&cli.root, &cfg, &mut LogReporter)
        .with_context(|| format!("Failed to scan library {}", cli.root.display()))?;

    println!("{} duplicates found\n", outcome.duplicates.len());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(outcome.duplicates.pairs())?);
    } else if !outcome.summary.is_empty() {
        println!("Duplicates by artist:");
        for (artist, count) in outcome.summary.counts() {
            println!("    - {artist}: {count}");
        }
    }

    println!("Runtime: {:.2}", start.elapsed().as_secs_f64());
    println!(
        "Report of {} files written to {}",
        outcome.nb_songs,
        cfg.report.log_file.display()
    );
    Ok(())
}
