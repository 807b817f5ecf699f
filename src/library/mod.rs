use std::path::{Path, PathBuf};

use crate::{config, domain::track::Track};

pub mod error;
pub mod fs;
pub mod path;

use error::LibraryError;

/// Music files found under a library root, in scan order
#[derive(Debug)]
pub struct Catalog {
    root: PathBuf,
    tracks: Vec<Track>,
}

impl Catalog {
    /// Walks `root` and collects every supported music file
    pub fn build(root: &Path, config: &config::Scan) -> Result<Self, LibraryError> {
        let catalog = Self {
            root: root.to_path_buf(),
            tracks: fs::scan_dir(root, config)?,
        };
        log::info!(
            "scanned {}: {} music files",
            catalog.root().display(),
            catalog.nb_songs()
        );
        Ok(catalog)
    }

    pub fn from_tracks(root: PathBuf, tracks: Vec<Track>) -> Self {
        Self { root, tracks }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn nb_songs(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn into_tracks(self) -> Vec<Track> {
        self.tracks
    }
}
