//! Internal domain models for song metadata enrichment.
//!
//! These types are OUR types - they don't change when external APIs change.
//! MusicBrainz and Cover Art Archive responses are reduced to these via the
//! extractor and the artwork selection helpers.

/// Display metadata for one song, as shown next to rankings and posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongMetadata {
    /// Recording title (empty when the catalog had none)
    pub title: String,
    /// Primary artist name (empty when the catalog had none)
    pub artist: String,
    /// Cover art URL, if either the release or its release group has one
    pub artwork_url: Option<String>,
}

/// How a raw song string will be resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
    /// A MusicBrainz recording ID (trimmed)
    Recording(String),
    /// Free text sent to recording search as-is
    Query(String),
}

impl LookupKey {
    /// Classify a raw input string.
    ///
    /// Anything that looks like an MBID after trimming is looked up directly;
    /// everything else, including "artist - title" strings, goes to search.
    pub fn classify(raw: &str) -> Self {
        let trimmed = raw.trim();
        if is_mbid(trimmed) {
            Self::Recording(trimmed.to_string())
        } else {
            Self::Query(raw.to_string())
        }
    }
}

/// Check for the 8-4-4-4-12 hex layout of a MusicBrainz identifier.
///
/// Case-insensitive. Does not trim.
pub fn is_mbid(value: &str) -> bool {
    const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

    if value.len() != 36 {
        return false;
    }

    let mut parts = value.split('-');
    for expected in GROUPS {
        match parts.next() {
            Some(part) if part.len() == expected => {
                if !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                    return false;
                }
            }
            _ => return false,
        }
    }
    parts.next().is_none()
}

/// Errors raised by the HTTP clients inside the enrichment module.
///
/// These never leave the pipeline: the resolver and artwork resolver log
/// them and fold them into "no data".
#[derive(Debug, Clone, thiserror::Error)]
pub enum EnrichmentError {
    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("No matches found")]
    NoMatches,

    #[error("Rate limited - try again later")]
    RateLimited,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mbid_detection() {
        assert!(is_mbid("b1a9c0e9-d987-4042-ae91-78d6a3267d69"));
        assert!(is_mbid("B1A9C0E9-D987-4042-AE91-78D6A3267D69"));
        assert!(!is_mbid("b1a9c0e9d9874042ae9178d6a3267d69"));
        assert!(!is_mbid("b1a9c0e9-d987-4042-ae91-78d6a3267d6"));
        assert!(!is_mbid("g1a9c0e9-d987-4042-ae91-78d6a3267d69"));
        assert!(!is_mbid("b1a9c0e9-d987-4042-ae9178-d6a3267d69"));
        assert!(!is_mbid("Queen - Bohemian Rhapsody"));
        assert!(!is_mbid(""));
    }

    #[test]
    fn test_classify_trims_identifiers() {
        let key = LookupKey::classify("  b1a9c0e9-d987-4042-ae91-78d6a3267d69\n");
        assert_eq!(
            key,
            LookupKey::Recording("b1a9c0e9-d987-4042-ae91-78d6a3267d69".to_string())
        );
    }

    #[test]
    fn test_classify_keeps_queries_verbatim() {
        let key = LookupKey::classify(" Queen - Bohemian Rhapsody ");
        assert_eq!(key, LookupKey::Query(" Queen - Bohemian Rhapsody ".to_string()));
    }

    #[test]
    fn test_song_metadata_default_is_empty() {
        let meta = SongMetadata::default();
        assert!(meta.title.is_empty());
        assert!(meta.artist.is_empty());
        assert!(meta.artwork_url.is_none());
    }
}
