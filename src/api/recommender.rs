//! SongRecommender concept: per-user song catalog and recommendation history.

use serde::Deserialize;
use serde_json::json;

use super::client::ApiClient;
use super::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Recommendation {
    #[serde(default)]
    recommended_songs: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NotYetRecommended {
    #[serde(default)]
    not_yet_recommended_songs: Vec<String>,
}

pub struct RecommenderApi<'a> {
    client: &'a ApiClient,
}

impl<'a> RecommenderApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn add_song_to_catalog(&self, user_id: &str, song_id: &str) -> Result<(), ApiError> {
        let body = json!({ "userId": user_id, "songId": song_id });
        self.client
            .post_unit("/SongRecommender/addSongToCatalog", &body)
            .await
    }

    /// Draw `count` new recommendations
    pub async fn generate_recommendation(
        &self,
        user_id: &str,
        count: u32,
    ) -> Result<Vec<String>, ApiError> {
        let body = json!({ "userId": user_id, "count": count });
        let recommendation: Recommendation = self
            .client
            .post("/SongRecommender/generateRecommendation", &body)
            .await?;
        Ok(recommendation.recommended_songs)
    }

    pub async fn remove_songs_from_catalog(
        &self,
        user_id: &str,
        song_ids: &[String],
    ) -> Result<(), ApiError> {
        let body = json!({ "userId": user_id, "songIds": song_ids });
        self.client
            .post_unit("/SongRecommender/removeSongsFromCatalog", &body)
            .await
    }

    pub async fn remove_songs_from_past_recommendations(
        &self,
        user_id: &str,
        song_ids: &[String],
    ) -> Result<(), ApiError> {
        let body = json!({ "userId": user_id, "songIds": song_ids });
        self.client
            .post_unit("/SongRecommender/removeSongsFromPastRecommendations", &body)
            .await
    }

    /// Everything recommended so far (a bare array of song IDs)
    pub async fn get_past_recommendations(&self, user_id: &str) -> Result<Vec<String>, ApiError> {
        self.client
            .post(
                "/SongRecommender/getPastRecommendations",
                &json!({ "userId": user_id }),
            )
            .await
    }

    pub async fn get_not_yet_recommended_songs(
        &self,
        user_id: &str,
    ) -> Result<Vec<String>, ApiError> {
        let response: NotYetRecommended = self
            .client
            .post(
                "/SongRecommender/getNotYetRecommendedSongs",
                &json!({ "userId": user_id }),
            )
            .await?;
        Ok(response.not_yet_recommended_songs)
    }
}
