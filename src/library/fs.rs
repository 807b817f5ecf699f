//! Module to scan the music directory in the file system

use walkdir::WalkDir;

use std::path::Path;

use crate::{
    config::{self, ExtensionRule},
    domain::track::Track,
    library::{error::LibraryError, path::relative_segments},
};

/// Returns the part of a file name compared against the supported extensions.
pub fn extension_key(name: &str, rule: ExtensionRule) -> String {
    match rule {
        ExtensionRule::LastThreeChars => last_three_chars(name).to_string(),
        ExtensionRule::Extension => Path::new(name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default(),
    }
}

/// the whole name when it is shorter than 3 characters
fn last_three_chars(name: &str) -> &str {
    name.char_indices()
        .rev()
        .nth(2)
        .map(|(i, _)| &name[i..])
        .unwrap_or(name)
}

pub fn is_supported(key: &str, extensions: &[String], rule: ExtensionRule) -> bool {
    match rule {
        ExtensionRule::LastThreeChars => extensions.iter().any(|ext| ext == key),
        ExtensionRule::Extension => extensions.iter().any(|ext| ext.eq_ignore_ascii_case(key)),
    }
}

/// Recursively scans all music files under `root`, depth first, in directory listing order
/// unless sorting by name is configured.
///
/// The first unreadable entry aborts the scan.
pub fn scan_dir(root: &Path, config: &config::Scan) -> Result<Vec<Track>, LibraryError> {
    let meta = std::fs::metadata(root).map_err(|source| LibraryError::Io {
        path: root.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(LibraryError::NotADirectory(root.to_path_buf()));
    }

    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(config.follow_symlinks);
    if config.sort_by_name {
        walker = walker.sort_by_file_name();
    }

    let mut tracks = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|err| LibraryError::Filesystem {
            path: err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source: err,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        let key = extension_key(&name, config.extension_rule);
        if !is_supported(&key, &config.extensions, config.extension_rule) {
            continue;
        }

        let size = entry
            .metadata()
            .map_err(|err| LibraryError::Filesystem {
                path: entry.path().to_path_buf(),
                source: err,
            })?
            .len();

        let segments = relative_segments(entry.path(), root, config.path_rule);
        let track = Track::from_segments(segments, size, key);
        log::debug!("found {}", track.joined_path());
        tracks.push(track);
    }

    Ok(tracks)
}
