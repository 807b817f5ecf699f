//! Turns an absolute file path into segments relative to the library root

use std::{
    collections::HashSet,
    path::{Component, Path},
};

use crate::config::PathRule;

fn normal_segments(path: &Path) -> impl Iterator<Item = String> + '_ {
    path.components().filter_map(|c| match c {
        Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
        _ => None,
    })
}

/// Splits `file` into the segments that follow `root`.
///
/// Never fails: a file outside of `root` keeps all of its segments, and a
/// degenerate path simply yields fewer segments.
pub fn relative_segments(file: &Path, root: &Path, rule: PathRule) -> Vec<String> {
    match rule {
        PathRule::Relative => match file.strip_prefix(root) {
            Ok(rest) => normal_segments(rest).collect(),
            Err(_) => normal_segments(file).collect(),
        },
        PathRule::Legacy => {
            // the file is made absolute, the root is taken as given
            let file = std::path::absolute(file).unwrap_or_else(|_| file.to_path_buf());
            let root_segments: HashSet<String> = normal_segments(root).collect();
            normal_segments(&file)
                .filter(|s| !root_segments.contains(s))
                .collect()
        }
    }
}
