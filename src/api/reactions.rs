//! Reaction concept.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::client::ApiClient;
use super::error::ApiError;

/// A reaction left on a post
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    #[serde(rename = "_id")]
    pub id: String,
    pub post: String,
    pub reaction_type: String,
    pub reacting_user: String,
}

#[derive(Debug, Deserialize)]
struct ReactionRow {
    reactions: Reaction,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddedReaction {
    reaction_id: String,
}

pub struct ReactionsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ReactionsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Add a reaction and return its ID
    pub async fn add(
        &self,
        post: &str,
        reaction_type: &str,
        reacting_user: &str,
    ) -> Result<String, ApiError> {
        let body = json!({
            "post": post,
            "reactionType": reaction_type,
            "reactingUser": reacting_user,
        });
        let added: AddedReaction = self.client.post("/Reaction/add", &body).await?;
        Ok(added.reaction_id)
    }

    pub async fn remove(
        &self,
        post: &str,
        reaction_type: &str,
        reacting_user: &str,
    ) -> Result<(), ApiError> {
        let body = json!({
            "post": post,
            "reactionType": reaction_type,
            "reactingUser": reacting_user,
        });
        self.client.post_unit("/Reaction/remove", &body).await
    }

    pub async fn get_reactions_for_post(&self, post: &str) -> Result<Vec<Reaction>, ApiError> {
        let rows: Vec<ReactionRow> = self
            .client
            .post("/Reaction/_getReactionsForPost", &json!({ "post": post }))
            .await?;
        Ok(rows.into_iter().map(|r| r.reactions).collect())
    }

    pub async fn get_reactions_by_post_and_user(
        &self,
        post: &str,
        reacting_user: &str,
    ) -> Result<Vec<Reaction>, ApiError> {
        let body = json!({ "post": post, "reactingUser": reacting_user });
        let rows: Vec<ReactionRow> = self
            .client
            .post("/Reaction/_getReactionsByPostAndUser", &body)
            .await?;
        Ok(rows.into_iter().map(|r| r.reactions).collect())
    }
}
