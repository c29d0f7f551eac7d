//! MusicBrainz API Data Transfer Objects
//!
//! These types match what the MusicBrainz `/recording` endpoints return when
//! called with `inc=aliases+artist-credits+releases`. Every field is optional
//! or defaulted: records come back partially populated, and a malformed field
//! degrades to empty rather than rejecting the record.
//!
//! DO NOT use these types outside the enrichment module - reduce them with the
//! extractor functions instead.
//!
//! API Reference: https://musicbrainz.org/doc/MusicBrainz_API

use serde::{Deserialize, Serialize};

use crate::enrichment::lenient;

/// A recording, from either a lookup or a search hit
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RecordingRecord {
    /// MusicBrainz recording ID
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub id: Option<String>,
    /// Track title
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub title: Option<String>,
    /// Search relevance (search results only)
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub score: Option<u32>,
    /// Artist credits (can be multiple for collaborations)
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub artist_credit: Vec<ArtistCredit>,
    /// Plain artist list, present on some legacy payloads
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub artists: Vec<Artist>,
    /// Releases this recording appears on
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub releases: Vec<Release>,
    /// Release groups this recording appears on
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub release_groups: Vec<ReleaseGroup>,
    /// Alternate titles
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub aliases: Vec<Alias>,
}

/// Artist credit entry
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ArtistCredit {
    /// How this artist is credited (may differ from official name)
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: Option<String>,
    /// Join phrase (e.g., " & ", " feat. ")
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub joinphrase: Option<String>,
    /// The credited artist
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub artist: Option<Artist>,
}

/// Artist info
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Artist {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: Option<String>,
    /// Sort name (e.g., "Beatles, The")
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub sort_name: Option<String>,
}

/// Release (album/single/EP)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Release {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub title: Option<String>,
    /// Release status (Official, Bootleg, etc.)
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub status: Option<String>,
    /// Release date (YYYY, YYYY-MM, or YYYY-MM-DD)
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub release_group: Option<ReleaseGroup>,
}

/// Release group (e.g., "Abbey Road" across all editions)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReleaseGroup {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub title: Option<String>,
    /// Primary type (Album, Single, EP, etc.)
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub primary_type: Option<String>,
}

/// Recording alias
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Alias {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub locale: Option<String>,
}

/// Recording search response
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchResponse {
    /// Total hits
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub count: Option<u64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub offset: Option<u64>,
    /// Hits, best first
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub recordings: Vec<RecordingRecord>,
}

/// Error response from MusicBrainz API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    pub error: String,
    pub help: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
