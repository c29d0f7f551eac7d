//! A user's song ranking.

use crate::api::{ApiClient, RankedSong};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct RankingStore {
    client: ApiClient,
    rankings: Vec<RankedSong>,
    error: Option<String>,
}

impl RankingStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            rankings: Vec::new(),
            error: None,
        }
    }

    pub fn rankings(&self) -> &[RankedSong] {
        &self.rankings
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Song IDs in ranking order
    pub fn song_ids(&self) -> Vec<String> {
        self.rankings.iter().map(|s| s.song_id.clone()).collect()
    }

    /// Record a comparison, then refetch the ranking
    pub async fn add_comparison(
        &mut self,
        user_id: &str,
        song_a: &str,
        song_b: &str,
        preferred: &str,
    ) -> Result<&[RankedSong]> {
        self.error = None;
        let result = self
            .client
            .ranking()
            .add_comparison(user_id, song_a, preferred, Some(song_b))
            .await;
        if let Err(e) = result {
            return Err(self.fail(e.into()));
        }
        self.fetch_rankings(user_id).await
    }

    /// Replace the ranking with the backend's current one
    pub async fn fetch_rankings(&mut self, user_id: &str) -> Result<&[RankedSong]> {
        self.error = None;
        let result = self.client.ranking().get_rankings(user_id).await;
        match result {
            Ok(rankings) => {
                tracing::debug!("Fetched {} ranked songs for {}", rankings.len(), user_id);
                self.rankings = rankings;
                Ok(&self.rankings)
            }
            Err(e) => Err(self.fail(e.into())),
        }
    }

    /// Remove a song from the ranking
    pub async fn remove_song(&mut self, user_id: &str, song_id: &str) -> Result<()> {
        self.error = None;
        let result = self.client.ranking().remove(user_id, song_id).await;
        match result {
            Ok(()) => {
                self.remove_local(song_id);
                Ok(())
            }
            Err(e) => Err(self.fail(e.into())),
        }
    }

    fn remove_local(&mut self, song_id: &str) {
        self.rankings.retain(|song| song.song_id != song_id);
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
    use crate::test_utils::{FakeBackend, mock_ranked_song};

    fn offline_store() -> RankingStore {
        RankingStore::new(ApiClient::new("http://127.0.0.1:1/api").unwrap())
    }

    #[test]
    fn test_song_ids_keep_ranking_order() {
        let mut store = offline_store();
        store.rankings = vec![mock_ranked_song("s2", 1600.0), mock_ranked_song("s1", 1400.0)];
        assert_eq!(store.song_ids(), vec!["s2", "s1"]);
    }

    #[test]
    fn test_remove_local() {
        let mut store = offline_store();
        store.rankings = vec![mock_ranked_song("s1", 1.0), mock_ranked_song("s2", 2.0)];
        store.remove_local("s2");
        assert_eq!(store.song_ids(), vec!["s1"]);
    }

    #[tokio::test]
    async fn test_failed_comparison_does_not_refetch() {
        let mut store = offline_store();
        store.rankings = vec![mock_ranked_song("s1", 1.0)];

        let result = store.add_comparison("u", "s1", "s2", "s1").await;

        assert!(matches!(result, Err(Error::Api(_))));
        assert_eq!(store.rankings().len(), 1);
        assert!(store.error().is_some());
    }

    #[tokio::test]
    async fn test_error_envelope_gives_empty_ranking() {
        let backend = FakeBackend::start(vec![(200, r#"{"error": "no ranking"}"#)]).await;
        let mut store = RankingStore::new(backend.client());
        store.rankings = vec![mock_ranked_song("stale", 1.0)];

        let ranked = store.fetch_rankings("u1").await.unwrap();

        assert!(ranked.is_empty());
        assert!(store.error().is_none());
        let request = backend.only_request();
        assert_eq!(request.path, "/Ranking/_getRankings");
        assert_eq!(request.body, json!({"user": "u1"}));
    }

    #[tokio::test]
    async fn test_add_comparison_refetches_ranking() {
        let backend = FakeBackend::start(vec![
            (200, "{}"),
            (
                200,
                r#"{"rankedSongs": [{"songId": "s1", "score": 1516.0}, {"songId": "s2", "score": 1484.0}]}"#,
            ),
        ])
        .await;
        let mut store = RankingStore::new(backend.client());

        let ranked = store.add_comparison("u1", "s1", "s2", "s1").await.unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(store.song_ids(), vec!["s1", "s2"]);

        let requests = backend.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].path, "/Ranking/addComparison");
        assert_eq!(
            requests[0].body,
            json!({"user": "u1", "songA": "s1", "songB": "s2", "preferred": "s1"})
        );
        assert_eq!(requests[1].path, "/Ranking/_getRankings");
    }

    #[tokio::test]
    async fn test_fetch_replaces_ranking() {
        let backend = FakeBackend::start(vec![(
            200,
            r#"{"rankedSongs": [{"songId": "new", "score": 1500}]}"#,
        )])
        .await;
        let mut store = RankingStore::new(backend.client());
        store.rankings = vec![mock_ranked_song("old", 1.0), mock_ranked_song("older", 0.5)];

        store.fetch_rankings("u1").await.unwrap();

        assert_eq!(store.song_ids(), vec!["new"]);
    }

    #[tokio::test]
    async fn test_remove_song_filters_on_success() {
        let backend = FakeBackend::start(vec![(200, "{}")]).await;
        let mut store = RankingStore::new(backend.client());
        store.rankings = vec![mock_ranked_song("s1", 1.0), mock_ranked_song("s2", 2.0)];

        store.remove_song("u1", "s1").await.unwrap();

        assert_eq!(store.song_ids(), vec!["s2"]);
        let request = backend.only_request();
        assert_eq!(request.path, "/Ranking/remove");
        assert_eq!(request.body, json!({"user": "u1", "song": "s1"}));
    }

    #[tokio::test]
    async fn test_remove_song_keeps_list_on_failure() {
        let backend = FakeBackend::start(vec![(500, r#"{"error": "boom"}"#)]).await;
        let mut store = RankingStore::new(backend.client());
        store.rankings = vec![mock_ranked_song("s1", 1.0)];

        assert!(store.remove_song("u1", "s1").await.is_err());

        assert_eq!(store.song_ids(), vec!["s1"]);
        assert_eq!(store.error(), Some("boom"));
    }
}
