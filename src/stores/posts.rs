//! Posts of the profile being viewed.

use chrono::Utc;

use crate::api::{ApiClient, Post};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct PostsStore {
    client: ApiClient,
    posts: Vec<Post>,
    error: Option<String>,
}

impl PostsStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            posts: Vec::new(),
            error: None,
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Publish a post stamped with the current time
    pub async fn create_post(&mut self, user_id: &str, content: &str) -> Result<Option<String>> {
        self.error = None;
        let timestamp = Utc::now().to_rfc3339();
        let result = self.client.posts().create(user_id, content, &timestamp).await;
        result.map_err(|e| self.fail(e.into()))
    }

    /// Replace the list with the author's posts
    pub async fn fetch_posts_by_author(&mut self, author_id: &str) -> Result<&[Post]> {
        self.error = None;
        let result = self.client.posts().get_posts_by_author(author_id).await;
        match result {
            Ok(posts) => {
                self.posts = posts;
                Ok(&self.posts)
            }
            Err(e) => Err(self.fail(e.into())),
        }
    }

    /// Delete a post and drop it from the list
    pub async fn delete_post(&mut self, post_id: &str) -> Result<()> {
        self.error = None;
        let result = self.client.posts().delete(post_id).await;
        match result {
            Ok(()) => {
                self.remove_local(post_id);
                Ok(())
            }
            Err(e) => Err(self.fail(e.into())),
        }
    }

    fn remove_local(&mut self, post_id: &str) {
        self.posts.retain(|post| post.id != post_id);
    }

    fn fail(&mut self, err: Error) -> Error {
        self.error = Some(err.to_string());
        err
    }
}
