//! Cover Art Archive HTTP client
//!
//! Lists artwork from the Cover Art Archive. No API key required, but the
//! archive is fronted by the same infrastructure as MusicBrainz, so calls go
//! through the shared rate limiter upstream.
//!
//! API: https://coverartarchive.org

use super::dto;
use crate::enrichment::domain::EnrichmentError;
use crate::enrichment::http;

/// Which kind of MusicBrainz entity the artwork belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtworkScope {
    Release,
    ReleaseGroup,
}

impl ArtworkScope {
    fn path_segment(self) -> &'static str {
        match self {
            Self::Release => "release",
            Self::ReleaseGroup => "release-group",
        }
    }
}

/// Cover Art Archive client
pub struct CoverArtClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CoverArtClient {
    /// Create a new client on a shared HTTP client
    pub fn new(http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            base_url: "https://coverartarchive.org".to_string(),
        }
    }

    /// Create a client with a custom base URL (mirrors, tests)
    pub fn with_base_url(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// List all cover art for a release or release group
    pub async fn list_cover_art(
        &self,
        scope: ArtworkScope,
        id: &str,
    ) -> Result<dto::CoverArtResponse, EnrichmentError> {
        let url = self.listing_url(scope, id);
        tracing::debug!("Cover Art Archive listing: {}", url);

        let response = http::get(&self.http_client, &url).await?;

        response
            .json::<dto::CoverArtResponse>()
            .await
            .map_err(|e| EnrichmentError::Parse(e.to_string()))
    }

    fn listing_url(&self, scope: ArtworkScope, id: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            scope.path_segment(),
            urlencoding::encode(id)
        )
    }
}
