//! HTTP client for the ranking backend.
//!
//! Every backend action is `POST {base}/{Concept}/{action}` with a JSON body.
//! Failures come back in two ways: a non-success status, or a 2xx body that
//! is an object with a string `error` field. Both end up as [`ApiError`].

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use super::{
    auth::AuthApi, friends::FriendsApi, posts::PostsApi, ranking::RankingApi,
    reactions::ReactionsApi, recommender::RecommenderApi,
};

/// Default backend location for local development
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Ranking backend client
#[derive(Debug, Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the backend at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http_client = reqwest::Client::builder().build()?;
        Ok(Self::with_http_client(http_client, base_url))
    }

    /// Create a client on an existing HTTP client
    pub fn with_http_client(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http_client,
            base_url,
        }
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    pub fn posts(&self) -> PostsApi<'_> {
        PostsApi::new(self)
    }

    pub fn reactions(&self) -> ReactionsApi<'_> {
        ReactionsApi::new(self)
    }

    pub fn friends(&self) -> FriendsApi<'_> {
        FriendsApi::new(self)
    }

    pub fn ranking(&self) -> RankingApi<'_> {
        RankingApi::new(self)
    }

    pub fn recommender(&self) -> RecommenderApi<'_> {
        RecommenderApi::new(self)
    }

    /// POST a JSON body and decode the response.
    pub(crate) async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("POST {}", url);

        let response = self.http_client.post(&url).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;

        // Failure statuses may carry HTML from a proxy
        let value = match parse_body(&text) {
            Ok(value) => value,
            Err(_) if !status.is_success() => Value::Null,
            Err(e) => return Err(e),
        };
        let value = check_envelope(status, value)?;
        Ok(serde_json::from_value(value)?)
    }

    /// POST and discard whatever the backend returns on success.
    pub(crate) async fn post_unit<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.post::<B, Value>(path, body).await.map(|_| ())
    }
}

/// Empty bodies are treated as JSON `null`.
fn parse_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(text)?)
}

/// Pull an `error` string out of a response body, if it has one.
fn error_message(body: &Value) -> Option<String> {
    body.get("error").and_then(Value::as_str).map(str::to_string)
}

/// Apply the backend's failure conventions to a decoded response.
pub(crate) fn check_envelope(status: StatusCode, body: Value) -> Result<Value, ApiError> {
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            message: error_message(&body),
        });
    }

    if let Some(message) = error_message(&body) {
        return Err(ApiError::Service(message));
    }

    Ok(body)
}
