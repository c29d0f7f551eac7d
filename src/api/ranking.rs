//! Ranking concept: pairwise comparisons and the resulting per-user ranking.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::client::ApiClient;
use super::error::ApiError;

/// A song's position in a user's ranking
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedSong {
    pub song_id: String,
    pub score: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RankingsResponse {
    #[serde(default)]
    ranked_songs: Vec<RankedSong>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ComparisonRequest<'a> {
    user: &'a str,
    song_a: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    song_b: Option<&'a str>,
    preferred: &'a str,
}

pub struct RankingApi<'a> {
    client: &'a ApiClient,
}

impl<'a> RankingApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Record that `preferred` beat the other song.
    ///
    /// Without `song_b` the backend just inserts `song_a` into the ranking.
    pub async fn add_comparison(
        &self,
        user: &str,
        song_a: &str,
        preferred: &str,
        song_b: Option<&str>,
    ) -> Result<(), ApiError> {
        let body = ComparisonRequest {
            user,
            song_a,
            song_b,
            preferred,
        };
        self.client.post_unit("/Ranking/addComparison", &body).await
    }

    pub async fn remove(&self, user: &str, song: &str) -> Result<(), ApiError> {
        self.client
            .post_unit("/Ranking/remove", &json!({ "user": user, "song": song }))
            .await
    }

    /// The user's ranked songs.
    ///
    /// A user without a ranking yet comes back from the backend as an error
    /// envelope; that is reported as an empty ranking.
    pub async fn get_rankings(&self, user: &str) -> Result<Vec<RankedSong>, ApiError> {
        let result: Result<RankingsResponse, ApiError> = self
            .client
            .post("/Ranking/_getRankings", &json!({ "user": user }))
            .await;

        match result {
            Ok(response) => Ok(response.ranked_songs),
            Err(ApiError::Service(message)) => {
                tracing::error!("Error fetching rankings: {}", message);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}
