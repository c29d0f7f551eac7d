//! MusicBrainz HTTP client
//!
//! Handles communication with the MusicBrainz web service.
//! See: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! IMPORTANT: MusicBrainz rate limits to 1 req/sec. This client does not
//! throttle on its own; callers go through the shared `RateLimiter`.

use super::dto;
use crate::enrichment::domain::EnrichmentError;
use crate::enrichment::http;

/// Expanded fields requested on every recording call.
///
/// The `+` separators must stay literal, so URLs are built by hand.
const RECORDING_INCLUDES: &str = "aliases+artist-credits+releases";

/// MusicBrainz API client
pub struct MusicBrainzClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl MusicBrainzClient {
    /// Create a new client on a shared HTTP client
    pub fn new(http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            base_url: "https://musicbrainz.org/ws/2".to_string(),
        }
    }

    /// Create a client with a custom base URL (mirrors, tests)
    pub fn with_base_url(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Look up a recording by MusicBrainz ID
    pub async fn lookup_recording(
        &self,
        recording_id: &str,
    ) -> Result<dto::RecordingRecord, EnrichmentError> {
        let url = self.lookup_url(recording_id);
        tracing::debug!("MusicBrainz lookup: {}", url);

        let response = http::get(&self.http_client, &url).await?;

        // An empty JSON body counts as "nothing found"
        response
            .json::<Option<dto::RecordingRecord>>()
            .await
            .map_err(|e| EnrichmentError::Parse(e.to_string()))?
            .ok_or(EnrichmentError::NoMatches)
    }

    /// Search recordings by free text and return the best hit
    pub async fn search_recording(
        &self,
        query: &str,
    ) -> Result<dto::RecordingRecord, EnrichmentError> {
        let url = self.search_url(query);
        tracing::debug!("MusicBrainz search: {}", url);

        let response = http::get(&self.http_client, &url).await?;

        let results = response
            .json::<dto::SearchResponse>()
            .await
            .map_err(|e| EnrichmentError::Parse(e.to_string()))?;

        results
            .recordings
            .into_iter()
            .next()
            .ok_or(EnrichmentError::NoMatches)
    }

    fn lookup_url(&self, recording_id: &str) -> String {
        format!(
            "{}/recording/{}?fmt=json&inc={}",
            self.base_url,
            urlencoding::encode(recording_id),
            RECORDING_INCLUDES
        )
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/recording?fmt=json&query={}&limit=1&inc={}",
            self.base_url,
            urlencoding::encode(query),
            RECORDING_INCLUDES
        )
    }
}
