//! Test utilities and fixtures for tuneboard tests.
//!
//! This module provides factories for catalog records and artwork listings
//! to reduce boilerplate in tests, plus [`FakeBackend`], a local HTTP server
//! standing in for the ranking backend.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{mock_recording, with_release};
//!
//! let record = with_release(mock_recording("Song", "Artist"), "rel-1");
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use crate::api::{ApiClient, Post, RankedSong};
use crate::enrichment::coverart::dto::{CoverArtResponse, Image, Thumbnails};
use crate::enrichment::musicbrainz::dto::{ArtistCredit, RecordingRecord, Release, ReleaseGroup};

/// Creates a recording with a title and a single credited artist.
///
/// No releases or release groups; add them with [`with_release`] and
/// [`with_release_group`].
pub fn mock_recording(title: &str, artist: &str) -> RecordingRecord {
    RecordingRecord {
        id: Some(format!("rec-{}", title.to_lowercase())),
        title: Some(title.to_string()),
        artist_credit: vec![ArtistCredit {
            name: Some(artist.to_string()),
            ..Default::default()
        }],
        ..Default::default()
    }
}

/// Appends a release with the given ID.
pub fn with_release(mut record: RecordingRecord, release_id: &str) -> RecordingRecord {
    record.releases.push(Release {
        id: Some(release_id.to_string()),
        ..Default::default()
    });
    record
}

/// Appends a release group with the given ID.
pub fn with_release_group(mut record: RecordingRecord, release_group_id: &str) -> RecordingRecord {
    record.release_groups.push(ReleaseGroup {
        id: Some(release_group_id.to_string()),
        ..Default::default()
    });
    record
}

/// Creates an artwork listing with one front image whose large thumbnail is `url`.
pub fn mock_listing(url: &str) -> CoverArtResponse {
    CoverArtResponse {
        images: vec![Image {
            front: true,
            types: vec!["Front".to_string()],
            image: Some(format!("{}.full", url)),
            thumbnails: Thumbnails {
                large: Some(url.to_string()),
                ..Default::default()
            },
            ..Default::default()
        }],
        release: None,
    }
}

/// Creates a post authored by `user_id`.
pub fn mock_post(id: &str, user_id: &str) -> Post {
    Post {
        id: id.to_string(),
        user_id: user_id.to_string(),
        content: format!("Post {}", id),
        timestamp: "2025-01-01T00:00:00+00:00".to_string(),
    }
}

/// Creates a ranked song.
pub fn mock_ranked_song(song_id: &str, score: f64) -> RankedSong {
    RankedSong {
        song_id: song_id.to_string(),
        score,
    }
}

// ============================================================================
// Fake ranking backend
// ============================================================================

/// One request seen by [`FakeBackend`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Path below the API base, e.g. `/Ranking/_getRankings`
    pub path: String,
    /// Decoded JSON body (`Null` if there was none)
    pub body: Value,
}

/// Local HTTP server answering backend calls with canned JSON.
///
/// Responses are served in order, one per connection, and every request's
/// path and body are recorded before its response is written.
pub struct FakeBackend {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeBackend {
    /// Start serving `(status, body)` pairs, one per incoming request.
    pub async fn start(responses: Vec<(u16, &str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);
        let responses: Vec<(u16, String)> = responses
            .into_iter()
            .map(|(status, body)| (status, body.to_string()))
            .collect();

        tokio::spawn(async move {
            for (status, body) in responses {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                let Some(request) = read_request(&mut stream).await else {
                    return;
                };
                recorded.lock().push(request);

                let response = format!(
                    "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        Self {
            base_url: format!("http://{}/api", addr),
            requests,
        }
    }

    /// A backend client pointed at this server
    pub fn client(&self) -> ApiClient {
        let http_client = reqwest::Client::builder().no_proxy().build().unwrap();
        ApiClient::with_http_client(http_client, self.base_url.clone())
    }

    /// Everything received so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// The only request received; panics if there were more or fewer.
    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected one request, got {:?}", requests);
        requests[0].clone()
    }
}

async fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
    let content_length = head
        .lines()
        .skip(1)
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let body_start = header_end + 4;
    while buf.len() < body_start + content_length {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let target = head.lines().next()?.split_whitespace().nth(1)?;
    let path = target.strip_prefix("/api").unwrap_or(target).to_string();
    let body = serde_json::from_slice(buf.get(body_start..)?).unwrap_or(Value::Null);

    Some(RecordedRequest { path, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::musicbrainz::extract;

    #[test]
    fn test_mock_recording_defaults() {
        let record = mock_recording("Song", "Artist");
        assert_eq!(extract::title(&record), "Song");
        assert_eq!(extract::primary_artist(&record), "Artist");
        assert!(extract::release_id(&record).is_none());
    }

    #[test]
    fn test_release_builders() {
        let record = with_release_group(with_release(mock_recording("S", "A"), "rel"), "rg");
        assert_eq!(extract::release_id(&record), Some("rel"));
        assert_eq!(extract::release_group_id(&record), Some("rg"));
    }

    #[test]
    fn test_mock_listing_prefers_large_thumbnail() {
        let listing = mock_listing("http://img/x.jpg");
        assert_eq!(listing.display_url().as_deref(), Some("http://img/x.jpg"));
    }
}
