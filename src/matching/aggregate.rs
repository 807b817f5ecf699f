use std::collections::HashMap;

use crate::{domain::duplicate::DuplicatePair, report::Reporter};

#[derive(Debug, Clone, PartialEq)]
pub struct ArtistDuplicates {
    pub artist: String,
    pub pairs: Vec<DuplicatePair>,
}

/// Duplicate pairs grouped by artist, in order of first appearance
#[derive(Debug, Default)]
pub struct ArtistSummary {
    groups: Vec<ArtistDuplicates>,
}

impl ArtistSummary {
    pub fn groups(&self) -> &[ArtistDuplicates] {
        &self.groups
    }

    /// number of pairs per artist
    pub fn counts(&self) -> impl Iterator<Item = (&str, usize)> {
        self.groups
            .iter()
            .map(|g| (g.artist.as_str(), g.pairs.len()))
    }

    pub fn count(&self, artist: &str) -> usize {
        self.groups
            .iter()
            .find(|g| g.artist == artist)
            .map_or(0, |g| g.pairs.len())
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.pairs.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// one section per artist, listing the sizes and paths of each pair
    pub fn report(&self, reporter: &mut dyn Reporter) {
        for group in &self.groups {
            reporter.artist_header(&group.artist);
            for pair in &group.pairs {
                reporter.duplicate(pair);
            }
        }
    }
}

pub fn aggregate(pairs: &[DuplicatePair]) -> ArtistSummary {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<ArtistDuplicates> = Vec::new();

    for pair in pairs {
        let slot = *index.entry(pair.artist.as_str()).or_insert_with(|| {
            groups.push(ArtistDuplicates {
                artist: pair.artist.clone(),
                pairs: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].pairs.push(pair.clone());
    }

    ArtistSummary { groups }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use proptest::prelude::*;

    use super::*;
    use crate::{
        domain::track::Track,
        library::Catalog,
        matching::find_duplicates,
        report::tests::{Event, RecordingReporter},
    };

    fn pair(artist: &str, a: &str, b: &str) -> DuplicatePair {
        let first = Track::from_segments(vec![artist.into(), a.into()], 1024, "mp3".into());
        let second = Track::from_segments(
            vec![artist.into(), "Album".into(), b.into()],
            2048,
            "mp3".into(),
        );
        DuplicatePair::new(&first, &second)
    }

    #[test]
    fn groups_keep_first_seen_artist_order() {
        let pairs = vec![
            pair("Zappa", "Peaches.mp3", "Peaches.mp3"),
            pair("Abba", "Waterloo.mp3", "Waterloo.mp3"),
            pair("Zappa", "Trouble.mp3", "01 Trouble.mp3"),
        ];

        let summary = aggregate(&pairs);

        assert_eq!(
            summary.counts().collect::<Vec<_>>(),
            vec![("Zappa", 2), ("Abba", 1)]
        );
        assert_eq!(summary.count("Zappa"), 2);
        assert_eq!(summary.count("Nobody"), 0);
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.groups()[0].pairs[1].songs[0], "Trouble.mp3");
    }

    #[test]
    fn empty_pairs_give_empty_summary() {
        let summary = aggregate(&[]);

        assert!(summary.is_empty());
        assert_eq!(summary.total(), 0);
        assert_eq!(summary.counts().count(), 0);
    }

    #[test]
    fn report_lists_each_artist_then_its_pairs() {
        let pairs = vec![
            pair("B", "x.mp3", "x.mp3"),
            pair("A", "y.mp3", "y.mp3"),
            pair("B", "z.mp3", "z.mp3"),
        ];
        let mut reporter = RecordingReporter::default();

        aggregate(&pairs).report(&mut reporter);

        let headers: Vec<_> = reporter
            .events
            .iter()
            .filter_map(|e| match e {
                Event::Header(artist) => Some(artist.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(headers, vec!["B", "A"]);
        assert_eq!(reporter.events.len(), 5);
        assert_eq!(
            reporter.events[1],
            Event::Duplicate(r#"([1.0, 2.0], ["B/x.mp3", "B/Album/x.mp3"])"#.to_string())
        );
    }

    proptest! {
        /// Per-artist counts add up to the number of pairs
        #[test]
        fn counts_sum_to_duplicate_count(
            entries in prop::collection::vec(
                (prop::sample::select(vec!["A", "B", "C"]), "[0-9]{0,2}[ab]{1,2}\\.mp3"),
                0..16,
            )
        ) {
            let tracks = entries
                .into_iter()
                .enumerate()
                .map(|(i, (artist, name))| {
                    Track::from_segments(
                        vec![artist.to_string(), format!("dir{i}"), name],
                        1,
                        "mp3".into(),
                    )
                })
                .collect();
            let duplicates = find_duplicates(Catalog::from_tracks(PathBuf::from("/music"), tracks));
            let summary = aggregate(duplicates.pairs());

            prop_assert_eq!(summary.total(), duplicates.len());
            prop_assert_eq!(summary.counts().map(|(_, n)| n).sum::<usize>(), duplicates.len());
        }
    }
}
