//! Post concept.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::client::ApiClient;
use super::error::ApiError;

/// A user's post
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub content: String,
    /// RFC 3339 creation time, as sent by the author's client
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
struct PostRow {
    post: Post,
}

#[derive(Debug, Default, Deserialize)]
struct CreatedPost {
    #[serde(default)]
    post: Option<String>,
}

pub struct PostsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PostsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Create a post; returns the new post ID when the backend reports one
    pub async fn create(
        &self,
        user_id: &str,
        content: &str,
        timestamp: &str,
    ) -> Result<Option<String>, ApiError> {
        let body = json!({
            "userId": user_id,
            "content": content,
            "timestamp": timestamp,
        });
        let created: CreatedPost = self.client.post("/Post/create", &body).await?;
        Ok(created.post)
    }

    pub async fn delete(&self, post: &str) -> Result<(), ApiError> {
        self.client
            .post_unit("/Post/delete", &json!({ "post": post }))
            .await
    }

    pub async fn get_posts_by_author(&self, author_id: &str) -> Result<Vec<Post>, ApiError> {
        let rows: Vec<PostRow> = self
            .client
            .post("/Post/_getPostsByAuthor", &json!({ "authorId": author_id }))
            .await?;
        Ok(rows.into_iter().map(|r| r.post).collect())
    }

    pub async fn get_post_by_id(&self, post_id: &str) -> Result<Option<Post>, ApiError> {
        let rows: Vec<PostRow> = self
            .client
            .post("/Post/_getPostById", &json!({ "postId": post_id }))
            .await?;
        Ok(rows.into_iter().next().map(|r| r.post))
    }
}
