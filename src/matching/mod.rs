//! Detection of duplicate songs inside each artist

use std::{borrow::Cow, collections::HashMap, sync::LazyLock};

use rayon::prelude::*;
use regex::Regex;

use crate::{
    config,
    domain::{duplicate::DuplicatePair, track::Track},
    library::Catalog,
    report::Reporter,
};

pub mod aggregate;

static LEADING_TRACK_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}").unwrap());

/// Removes the first two characters of `name` when both are ASCII digits.
///
/// `"02 Song.mp3"` becomes `" Song.mp3"`.
pub fn clean_name(name: &str) -> Cow<'_, str> {
    LEADING_TRACK_NUMBER.replace(name, "")
}

/// Every duplicate pair found in a catalog
#[derive(Debug, Default)]
pub struct Duplicates {
    pairs: Vec<DuplicatePair>,
}

impl Duplicates {
    pub fn pairs(&self) -> &[DuplicatePair] {
        &self.pairs
    }

    /// number of pairs found
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn into_pairs(self) -> Vec<DuplicatePair> {
        self.pairs
    }
}

/// Compares every track with the tracks of the same artist that come after it.
///
/// A later track is a duplicate when its name contains the cleaned name of
/// the earlier one. Each unordered pair is tested once.
fn scan_pairs(tracks: &[&Track]) -> Vec<DuplicatePair> {
    let mut pairs = Vec::new();

    for (i, current) in tracks.iter().enumerate() {
        let cleaned = clean_name(&current.name);

        for candidate in tracks[i + 1..]
            .iter()
            .filter(|t| t.artist == current.artist)
        {
            if candidate.name.contains(&*cleaned) {
                log::debug!(
                    "{} duplicates {}",
                    candidate.joined_path(),
                    current.joined_path()
                );
                pairs.push(DuplicatePair::new(current, candidate));
            }
        }
    }

    pairs
}

/// Finds duplicates in scan order. Consumes the catalog.
pub fn find_duplicates(catalog: Catalog) -> Duplicates {
    let tracks = catalog.into_tracks();
    let refs: Vec<&Track> = tracks.iter().collect();
    Duplicates {
        pairs: scan_pairs(&refs),
    }
}

/// Same pairs as [`find_duplicates`], with artists compared in parallel.
///
/// Pairs come grouped by artist, in order of first appearance of the artist.
pub fn find_duplicates_parallel(catalog: Catalog) -> Duplicates {
    let tracks = catalog.into_tracks();

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Vec<&Track>> = Vec::new();
    for track in &tracks {
        let slot = *index.entry(track.artist.as_str()).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(track);
    }

    let pairs = groups
        .par_iter()
        .map(|group| scan_pairs(group))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect();

    Duplicates { pairs }
}

/// Runs the matching pass and tells the reporter how much work there is
pub struct DuplicateMatcher<'r> {
    reporter: &'r mut dyn Reporter,
    parallel: bool,
}

impl<'r> DuplicateMatcher<'r> {
    pub fn new(reporter: &'r mut dyn Reporter, config: &config::Matching) -> Self {
        Self {
            reporter,
            parallel: config.parallel,
        }
    }

    pub fn find_duplicates(&mut self, catalog: Catalog) -> Duplicates {
        self.reporter.files_to_process(catalog.nb_songs());
        let duplicates = if self.parallel {
            find_duplicates_parallel(catalog)
        } else {
            find_duplicates(catalog)
        };
        log::info!("{} duplicates found", duplicates.len());
        duplicates
    }
}
