use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("filesystem error while scanning {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("library root {} is not a directory", .0.display())]
    NotADirectory(PathBuf),
}
