//! Trait definitions for external API clients.
//!
//! These traits enable dependency injection and mocking for tests.
//! Production code uses the real client implementations, while tests
//! substitute mocks that record every call they receive.
//!
//! # Example
//!
//! ```ignore
//! use tuneboard::enrichment::traits::RecordingCatalog;
//!
//! async fn title_of<C: RecordingCatalog>(catalog: &C, mbid: &str) -> Option<String> {
//!     catalog.lookup_recording(mbid).await.ok()?.title
//! }
//! ```

use async_trait::async_trait;

use super::coverart::{ArtworkScope, CoverArtResponse};
use super::domain::{EnrichmentError, SongMetadata};
use super::musicbrainz::RecordingRecord;

/// Trait for recording lookup and search (MusicBrainz).
#[async_trait]
pub trait RecordingCatalog: Send + Sync {
    /// Look up a recording by its MusicBrainz ID.
    async fn lookup_recording(&self, recording_id: &str)
    -> Result<RecordingRecord, EnrichmentError>;

    /// Search by free text and return the best hit.
    async fn search_recording(&self, query: &str) -> Result<RecordingRecord, EnrichmentError>;
}

/// Trait for artwork listings (Cover Art Archive).
#[async_trait]
pub trait ArtworkArchive: Send + Sync {
    /// List artwork for a release or release group.
    async fn list_cover_art(
        &self,
        scope: ArtworkScope,
        id: &str,
    ) -> Result<CoverArtResponse, EnrichmentError>;
}

/// Anything that can turn a raw song string into display metadata.
///
/// Implemented by the enrichment service; the memoizing cache is generic
/// over it.
#[async_trait]
pub trait MetadataLookup: Send + Sync {
    /// Best-effort lookup; `None` means nothing could be found.
    async fn lookup(&self, raw: &str) -> Option<SongMetadata>;
}

// Implement traits for real clients

#[async_trait]
impl RecordingCatalog for super::musicbrainz::MusicBrainzClient {
    async fn lookup_recording(
        &self,
        recording_id: &str,
    ) -> Result<RecordingRecord, EnrichmentError> {
        self.lookup_recording(recording_id).await
    }

    async fn search_recording(&self, query: &str) -> Result<RecordingRecord, EnrichmentError> {
        self.search_recording(query).await
    }
}

#[async_trait]
impl ArtworkArchive for super::coverart::CoverArtClient {
    async fn list_cover_art(
        &self,
        scope: ArtworkScope,
        id: &str,
    ) -> Result<CoverArtResponse, EnrichmentError> {
        self.list_cover_art(scope, id).await
    }
}
