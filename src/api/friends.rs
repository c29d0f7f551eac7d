//! Friends concept: requests and the friendship graph.
//!
//! Queries return a one-element array wrapping the answer; an empty array
//! means "nothing", not an error.

use serde::Deserialize;
use serde_json::json;

use super::client::ApiClient;
use super::error::ApiError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FriendshipRow {
    #[serde(default)]
    is_friend: bool,
}

#[derive(Debug, Deserialize)]
struct FriendsRow {
    #[serde(default)]
    friends: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RecipientsRow {
    #[serde(default)]
    recipients: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SendersRow {
    #[serde(default)]
    senders: Vec<String>,
}

pub struct FriendsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> FriendsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn send_friend_request(&self, sender: &str, recipient: &str) -> Result<(), ApiError> {
        let body = json!({ "sender": sender, "recipient": recipient });
        self.client
            .post_unit("/Friends/sendFriendRequest", &body)
            .await
    }

    pub async fn accept_friend_request(&self, recipient: &str, sender: &str) -> Result<(), ApiError> {
        let body = json!({ "recipient": recipient, "sender": sender });
        self.client
            .post_unit("/Friends/acceptFriendRequest", &body)
            .await
    }

    pub async fn reject_friend_request(&self, recipient: &str, sender: &str) -> Result<(), ApiError> {
        let body = json!({ "recipient": recipient, "sender": sender });
        self.client
            .post_unit("/Friends/rejectFriendRequest", &body)
            .await
    }

    pub async fn remove_friend(&self, user1: &str, user2: &str) -> Result<(), ApiError> {
        let body = json!({ "user1": user1, "user2": user2 });
        self.client.post_unit("/Friends/removeFriend", &body).await
    }

    pub async fn verify_friendship(&self, user1: &str, user2: &str) -> Result<bool, ApiError> {
        let body = json!({ "user1": user1, "user2": user2 });
        let rows: Vec<FriendshipRow> = self
            .client
            .post("/Friends/_verifyFriendship", &body)
            .await?;
        Ok(rows.first().is_some_and(|r| r.is_friend))
    }

    pub async fn get_friends(&self, user: &str) -> Result<Vec<String>, ApiError> {
        let rows: Vec<FriendsRow> = self
            .client
            .post("/Friends/_getFriends", &json!({ "user": user }))
            .await?;
        Ok(first_or_empty(rows, |r| r.friends))
    }

    pub async fn get_sent_requests(&self, user: &str) -> Result<Vec<String>, ApiError> {
        let rows: Vec<RecipientsRow> = self
            .client
            .post("/Friends/_getSentRequests", &json!({ "user": user }))
            .await?;
        Ok(first_or_empty(rows, |r| r.recipients))
    }

    pub async fn get_received_requests(&self, user: &str) -> Result<Vec<String>, ApiError> {
        let rows: Vec<SendersRow> = self
            .client
            .post("/Friends/_getReceivedRequests", &json!({ "user": user }))
            .await?;
        Ok(first_or_empty(rows, |r| r.senders))
    }
}

fn first_or_empty<R>(rows: Vec<R>, list: impl FnOnce(R) -> Vec<String>) -> Vec<String> {
    rows.into_iter().next().map(list).unwrap_or_default()
}
