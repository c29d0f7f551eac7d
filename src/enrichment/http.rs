//! Shared HTTP plumbing for the public lookup services.
//!
//! MusicBrainz requires an identifying User-Agent; both services get the same
//! one, JSON `Accept`, and a fixed per-call timeout.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

use super::domain::EnrichmentError;
use super::musicbrainz::dto::ApiError;

/// User agent string - MusicBrainz requires this
pub const USER_AGENT: &str = concat!(
    "Tuneboard/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/tuneboard/tuneboard)"
);

/// Per-call transport timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

/// Build the HTTP client used for catalog and artwork lookups.
pub fn build_client() -> Result<reqwest::Client, EnrichmentError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| EnrichmentError::Network(format!("Failed to build HTTP client: {}", e)))
}

/// Send a GET and map transport errors and common failure statuses.
pub async fn get(client: &reqwest::Client, url: &str) -> Result<reqwest::Response, EnrichmentError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| EnrichmentError::Network(e.to_string()))?;

    let status = response.status();

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(EnrichmentError::NoMatches);
    }

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(EnrichmentError::RateLimited);
    }

    if !status.is_success() {
        // MusicBrainz explains failures in a JSON body; the archive does not
        if let Ok(error) = response.json::<ApiError>().await {
            return Err(EnrichmentError::ApiError(error.error));
        }
        return Err(EnrichmentError::Network(format!(
            "HTTP {}: {}",
            status,
            status.canonical_reason().unwrap_or("Unknown")
        )));
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_format() {
        assert!(USER_AGENT.starts_with("Tuneboard/"));
        assert!(USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_client_builds() {
        assert!(build_client().is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let client = build_client().unwrap();
        let result = get(&client, "http://127.0.0.1:1/ws/2/recording").await;
        assert!(matches!(result, Err(EnrichmentError::Network(_))));
    }
}
