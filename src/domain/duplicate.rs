use serde::Serialize;

use super::track::Track;

/// Two tracks of the same artist detected as the same song.
///
/// Index 0 always holds the track seen first during the scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicatePair {
    pub artist: String,
    pub songs: [String; 2],
    pub sizes: [f64; 2],
    pub folders: [String; 2],
    pub paths: [String; 2],
}

impl DuplicatePair {
    pub fn new(current: &Track, candidate: &Track) -> Self {
        Self {
            artist: current.artist.clone(),
            songs: [current.name.clone(), candidate.name.clone()],
            sizes: [current.size, candidate.size],
            folders: [current.folder.clone(), candidate.folder.clone()],
            paths: [current.joined_path(), candidate.joined_path()],
        }
    }
}
