use serde::Serialize;

/// Folder name given to tracks that sit directly in their artist directory
pub const ROOT_FOLDER: &str = "ROOT_FOLDER";

/// Represent a music file found in the library
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    pub artist: String,
    pub name: String,
    /// file size in KiB
    pub size: f64,
    pub folder: String,
    /// path segments relative to the library root
    pub path: Vec<String>,
    pub extension: String,
}

impl Track {
    /// Builds a track from its relative path segments.
    ///
    /// `artist` is the first segment and `name` the last one. `folder` is the
    /// second-to-last segment, unless the track lives directly under its
    /// artist directory, in which case it is [`ROOT_FOLDER`].
    pub fn from_segments(path: Vec<String>, size_bytes: u64, extension: String) -> Self {
        let artist = path.first().cloned().unwrap_or_default();
        let name = path.last().cloned().unwrap_or_default();
        let folder = if path.len() >= 3 {
            path[path.len() - 2].clone()
        } else {
            ROOT_FOLDER.to_string()
        };

        Self {
            artist,
            name,
            size: size_bytes as f64 / 1024.0,
            folder,
            path,
            extension,
        }
    }

    /// relative path joined with `/`, regardless of platform
    pub fn joined_path(&self) -> String {
        self.path.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn track_in_album_folder() {
        let track = Track::from_segments(
            segments(&["Artist1", "Album", "01 Song.mp3"]),
            4096,
            "mp3".into(),
        );

        assert_eq!(track.artist, "Artist1");
        assert_eq!(track.folder, "Album");
        assert_eq!(track.name, "01 Song.mp3");
        assert_eq!(track.size, 4.0);
        assert_eq!(track.joined_path(), "Artist1/Album/01 Song.mp3");
    }

    #[test]
    fn track_directly_under_artist_uses_root_folder() {
        let track = Track::from_segments(segments(&["Artist1", "Solo.mp3"]), 0, "mp3".into());

        assert_eq!(track.artist, "Artist1");
        assert_eq!(track.name, "Solo.mp3");
        assert_eq!(track.folder, ROOT_FOLDER);
    }

    #[test]
    fn track_directly_under_root() {
        let track = Track::from_segments(segments(&["Loose.mp3"]), 512, "mp3".into());

        assert_eq!(track.artist, "Loose.mp3");
        assert_eq!(track.name, "Loose.mp3");
        assert_eq!(track.folder, ROOT_FOLDER);
        assert_eq!(track.size, 0.5);
    }

    #[test]
    fn deeply_nested_track_uses_parent_folder() {
        let track = Track::from_segments(
            segments(&["Artist", "Box Set", "CD2", "07 Tune.wav"]),
            1024,
            "wav".into(),
        );

        assert_eq!(track.folder, "CD2");
        assert_eq!(track.joined_path(), "Artist/Box Set/CD2/07 Tune.wav");
    }
}
