//! Display-field extraction from recording records.
//!
//! This is the ONLY place where recording DTOs are read for display.
//! Every accessor is total: missing data yields an empty string or `None`.

use super::dto::RecordingRecord;

/// Recording title, or empty
pub fn title(record: &RecordingRecord) -> String {
    record.title.clone().unwrap_or_default()
}

/// Name of the primary artist.
///
/// The first artist-credit's credited name wins; the plain artist list is
/// only consulted when the credit has no name.
pub fn primary_artist(record: &RecordingRecord) -> String {
    record
        .artist_credit
        .first()
        .and_then(|credit| credit.name.clone())
        .or_else(|| record.artists.first().and_then(|a| a.name.clone()))
        .unwrap_or_default()
}

/// ID of the first release, if any
pub fn release_id(record: &RecordingRecord) -> Option<&str> {
    record.releases.first().and_then(|r| r.id.as_deref())
}

/// ID of the first release group, if any
pub fn release_group_id(record: &RecordingRecord) -> Option<&str> {
    record.release_groups.first().and_then(|rg| rg.id.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::musicbrainz::dto::{Artist, ArtistCredit, Release, ReleaseGroup};

    fn artist(name: &str) -> Artist {
        Artist {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_record_yields_defaults() {
        let record = RecordingRecord::default();
        assert_eq!(title(&record), "");
        assert_eq!(primary_artist(&record), "");
        assert!(release_id(&record).is_none());
        assert!(release_group_id(&record).is_none());
    }

    #[test]
    fn test_credit_name_preferred_over_artist_list() {
        let record = RecordingRecord {
            artist_credit: vec![ArtistCredit {
                name: Some("Credited Name".to_string()),
                ..Default::default()
            }],
            artists: vec![artist("Listed Name")],
            ..Default::default()
        };
        assert_eq!(primary_artist(&record), "Credited Name");
    }

    #[test]
    fn test_artist_list_used_when_credit_unnamed() {
        let record = RecordingRecord {
            artist_credit: vec![ArtistCredit {
                name: None,
                artist: Some(artist("Nested Name")),
                ..Default::default()
            }],
            artists: vec![artist("Listed Name")],
            ..Default::default()
        };
        assert_eq!(primary_artist(&record), "Listed Name");
    }

    #[test]
    fn test_only_first_entries_are_used() {
        let record = RecordingRecord {
            title: Some("Song".to_string()),
            releases: vec![
                Release {
                    id: Some("rel-1".to_string()),
                    ..Default::default()
                },
                Release {
                    id: Some("rel-2".to_string()),
                    ..Default::default()
                },
            ],
            release_groups: vec![
                ReleaseGroup {
                    id: Some("rg-1".to_string()),
                    ..Default::default()
                },
                ReleaseGroup {
                    id: Some("rg-2".to_string()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(title(&record), "Song");
        assert_eq!(release_id(&record), Some("rel-1"));
        assert_eq!(release_group_id(&record), Some("rg-1"));
    }

    #[test]
    fn test_first_release_without_id() {
        let record = RecordingRecord {
            releases: vec![
                Release::default(),
                Release {
                    id: Some("rel-2".to_string()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert!(release_id(&record).is_none());
    }
}
