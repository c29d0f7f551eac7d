//! Enrichment service - orchestrates song metadata lookup
//!
//! This is the high-level API for decorating songs with display metadata:
//! 1. Classify the raw string (MBID or free text)
//! 2. Look up or search the recording on MusicBrainz
//! 3. Extract title, primary artist and release IDs
//! 4. Fetch cover art for the release, falling back to the release group
//!
//! Every outbound call waits on one shared [`RateLimiter`]. Failures at any
//! step are logged and treated as "no data"; nothing here returns an error.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::enrichment::{
    coverart::{ArtworkScope, CoverArtClient},
    domain::{EnrichmentError, LookupKey, SongMetadata},
    http,
    musicbrainz::{MusicBrainzClient, RecordingRecord, extract},
    rate_limit::RateLimiter,
    traits::{ArtworkArchive, MetadataLookup, RecordingCatalog},
};

/// Configuration for the enrichment service
#[derive(Debug, Clone)]
pub struct EnrichmentConfig {
    /// Requested call rate against MusicBrainz and the Cover Art Archive.
    /// Never faster than 1 req/sec in practice.
    pub requests_per_second: f64,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            requests_per_second: 1.0,
        }
    }
}

/// Service for enriching raw song strings with display metadata
pub struct EnrichmentService<C = MusicBrainzClient, A = CoverArtClient> {
    catalog: C,
    archive: A,
    limiter: Arc<RateLimiter>,
}

impl EnrichmentService {
    /// Create a service talking to the public MusicBrainz and Cover Art Archive.
    ///
    /// Both services share one limiter and one HTTP client.
    pub fn new(config: &EnrichmentConfig) -> Result<Self, EnrichmentError> {
        let http_client = http::build_client()?;
        Ok(Self::with_clients(
            MusicBrainzClient::new(http_client.clone()),
            CoverArtClient::new(http_client),
            Arc::new(RateLimiter::new(config.requests_per_second)),
        ))
    }
}

impl<C: RecordingCatalog, A: ArtworkArchive> EnrichmentService<C, A> {
    /// Create a service from explicit clients and limiter
    pub fn with_clients(catalog: C, archive: A, limiter: Arc<RateLimiter>) -> Self {
        Self {
            catalog,
            archive,
            limiter,
        }
    }

    /// The limiter shared by all outbound calls
    pub fn limiter(&self) -> &Arc<RateLimiter> {
        &self.limiter
    }

    /// Resolve a raw string to a recording.
    ///
    /// MBIDs go to direct lookup, everything else to a one-result search.
    pub async fn resolve(&self, raw: &str) -> Option<RecordingRecord> {
        let key = LookupKey::classify(raw);

        self.limiter.wait().await;
        let result = match &key {
            LookupKey::Recording(id) => self.catalog.lookup_recording(id).await,
            LookupKey::Query(query) => self.catalog.search_recording(query).await,
        };

        match result {
            Ok(record) => Some(record),
            Err(EnrichmentError::NoMatches) => {
                tracing::debug!("No recording found for {:?}", key);
                None
            }
            Err(e) => {
                // Log but don't fail - metadata is decoration
                tracing::warn!("MusicBrainz lookup failed for {:?}: {}", key, e);
                None
            }
        }
    }

    /// Find a cover art URL, trying the release first and the release group second.
    ///
    /// An absent ID costs no request.
    pub async fn resolve_artwork(
        &self,
        release_id: Option<&str>,
        release_group_id: Option<&str>,
    ) -> Option<String> {
        if let Some(url) = self.artwork_for(ArtworkScope::Release, release_id).await {
            return Some(url);
        }
        self.artwork_for(ArtworkScope::ReleaseGroup, release_group_id)
            .await
    }

    async fn artwork_for(&self, scope: ArtworkScope, id: Option<&str>) -> Option<String> {
        let id = id?;

        self.limiter.wait().await;
        match self.archive.list_cover_art(scope, id).await {
            Ok(listing) => listing.display_url(),
            Err(EnrichmentError::NoMatches) => {
                tracing::debug!("No cover art for {:?} {}", scope, id);
                None
            }
            Err(e) => {
                tracing::warn!("Cover art lookup failed for {:?} {}: {}", scope, id, e);
                None
            }
        }
    }

    /// Look up display metadata for one raw song string.
    ///
    /// Returns `None` if no recording was found. Missing artwork is not a
    /// failure; it just leaves `artwork_url` empty.
    pub async fn lookup_one(&self, raw: &str) -> Option<SongMetadata> {
        let record = self.resolve(raw).await?;

        let title = extract::title(&record);
        let artist = extract::primary_artist(&record);
        let artwork_url = self
            .resolve_artwork(
                extract::release_id(&record),
                extract::release_group_id(&record),
            )
            .await;

        Some(SongMetadata {
            title,
            artist,
            artwork_url,
        })
    }

    /// Look up many songs, strictly one after another in input order.
    ///
    /// Each lookup finishes, artwork included, before the next one starts.
    pub async fn lookup_many<S: AsRef<str>>(
        &self,
        raws: &[S],
    ) -> HashMap<String, Option<SongMetadata>> {
        let mut results = HashMap::with_capacity(raws.len());

        for (i, raw) in raws.iter().enumerate() {
            let raw = raw.as_ref();
            let metadata = self.lookup_one(raw).await;
            results.insert(raw.to_string(), metadata);

            // Progress logging
            if (i + 1) % 10 == 0 {
                tracing::info!("Enriched {}/{} songs", i + 1, raws.len());
            }
        }

        results
    }
}

#[async_trait]
impl<C: RecordingCatalog, A: ArtworkArchive> MetadataLookup for EnrichmentService<C, A> {
    async fn lookup(&self, raw: &str) -> Option<SongMetadata> {
        self.lookup_one(raw).await
    }
}
