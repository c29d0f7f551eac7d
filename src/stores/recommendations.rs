//! The most recent batch of recommended songs.

use crate::api::ApiClient;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct RecommendationsStore {
    client: ApiClient,
    songs: Vec<String>,
    error: Option<String>,
}

impl RecommendationsStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            songs: Vec::new(),
            error: None,
        }
    }

    pub fn songs(&self) -> &[String] {
        &self.songs
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_recommendations(&mut self, songs: Vec<String>) {
        self.songs = songs;
    }

    pub fn clear(&mut self) {
        self.songs.clear();
    }

    /// Ask the recommender for `count` songs and keep them
    pub async fn generate(&mut self, user_id: &str, count: u32) -> Result<&[String]> {
        self.error = None;
        let result = self
            .client
            .recommender()
            .generate_recommendation(user_id, count)
            .await;
        match result {
            Ok(songs) => {
                tracing::debug!("Received {} recommendations for {}", songs.len(), user_id);
                self.set_recommendations(songs);
                Ok(&self.songs)
            }
            Err(e) => Err(self.fail(e.into())),
        }
    }

    fn fail(&mut self, err: Error) -> Error {
        self.error = Some(err.to_string());
        err
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_utils::FakeBackend;

    fn offline_store() -> RecommendationsStore {
        RecommendationsStore::new(ApiClient::new("http://127.0.0.1:1/api").unwrap())
    }

    #[test]
    fn test_set_and_clear() {
        let mut store = offline_store();
        store.set_recommendations(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(store.songs(), ["a", "b"]);

        store.clear();
        assert!(store.songs().is_empty());
    }

    #[tokio::test]
    async fn test_failed_generate_keeps_previous_batch() {
        let mut store = offline_store();
        store.set_recommendations(vec!["a".to_string()]);

        assert!(store.generate("u", 3).await.is_err());

        assert_eq!(store.songs(), ["a"]);
        assert!(store.error().is_some());
    }

    #[tokio::test]
    async fn test_generate_stores_backend_songs() {
        let backend =
            FakeBackend::start(vec![(200, r#"{"recommendedSongs": ["s7", "s3"]}"#)]).await;
        let mut store = RecommendationsStore::new(backend.client());
        store.set_recommendations(vec!["old".to_string()]);

        let songs = store.generate("u1", 2).await.unwrap();

        assert_eq!(songs, ["s7", "s3"]);
        let request = backend.only_request();
        assert_eq!(request.path, "/SongRecommender/generateRecommendation");
        assert_eq!(request.body, json!({"userId": "u1", "count": 2}));
    }

    #[tokio::test]
    async fn test_generate_error_envelope_is_recorded() {
        let backend =
            FakeBackend::start(vec![(200, r#"{"error": "Catalog is empty"}"#)]).await;
        let mut store = RecommendationsStore::new(backend.client());

        assert!(store.generate("u1", 2).await.is_err());

        assert!(store.songs().is_empty());
        assert_eq!(store.error(), Some("Catalog is empty"));
    }
}
