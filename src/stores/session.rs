//! Logged-in user state.

use crate::api::ApiClient;
use crate::error::{Error, Result};

/// Who is logged in, if anyone
#[derive(Debug, Clone)]
pub struct SessionStore {
    client: ApiClient,
    user_id: Option<String>,
    username: Option<String>,
    error: Option<String>,
}

impl SessionStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            user_id: None,
            username: None,
            error: None,
        }
    }

    /// Create an account and log in as it
    pub async fn register(&mut self, username: &str, password: &str) -> Result<&str> {
        self.error = None;
        let result = self.client.auth().register(username, password).await;
        match result {
            Ok(user) => Ok(self.start(user, username)),
            Err(e) => Err(self.fail(e.into())),
        }
    }

    /// Log in with existing credentials
    pub async fn login(&mut self, username: &str, password: &str) -> Result<&str> {
        self.error = None;
        let result = self.client.auth().authenticate(username, password).await;
        match result {
            Ok(user) => Ok(self.start(user, username)),
            Err(e) => Err(self.fail(e.into())),
        }
    }

    /// Forget the current user
    pub fn logout(&mut self) {
        tracing::debug!("Logging out {:?}", self.username);
        self.user_id = None;
        self.username = None;
        self.error = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Last failure, for display
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The logged-in user ID, or [`Error::NotAuthenticated`]
    pub fn require_user(&self) -> Result<&str> {
        self.user_id.as_deref().ok_or(Error::NotAuthenticated)
    }

    fn start(&mut self, user: String, username: &str) -> &str {
        tracing::info!("Logged in as {}", username);
        self.username = Some(username.to_string());
        self.user_id.insert(user)
    }

    fn fail(&mut self, err: Error) -> Error {
        self.error = Some(err.to_string());
        err
    }
}
