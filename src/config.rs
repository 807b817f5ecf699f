use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_EXTENSIONS: &[&str] = &["mp3", "m4a", "wav", "wma", "flac"];
pub const DEFAULT_LOG_FILE: &str = "report.log";

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub scan: Scan,
    pub matching: Matching,
    pub report: Report,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&contents).with_context(|| "Failed to parse config TOML")
    }
}

/// How the extension of a file is decided
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExtensionRule {
    /// last 3 characters of the file name, whatever precedes them
    #[default]
    LastThreeChars,
    /// text after the last dot, case-insensitive
    Extension,
}

/// How a file path is turned into segments relative to the library root
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PathRule {
    /// strip the root prefix and split what is left
    #[default]
    Relative,
    /// drop every segment that also appears somewhere in the root path.
    /// The file path is made absolute first, the root is used as given.
    Legacy,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Scan {
    pub extensions: Vec<String>,
    pub extension_rule: ExtensionRule,
    pub path_rule: PathRule,
    /// symlinked files and directories are scanned like real ones
    pub follow_symlinks: bool,
    /// visit directory entries sorted by file name instead of listing order
    pub sort_by_name: bool,
}

impl Default for Scan {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            extension_rule: ExtensionRule::default(),
            path_rule: PathRule::default(),
            follow_symlinks: true,
            sort_by_name: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Matching {
    /// compare artist groups on the rayon thread pool
    pub parallel: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Report {
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: "info".to_string(),
        }
    }
}
