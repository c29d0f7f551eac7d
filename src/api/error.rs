//! Backend call errors.
//!
//! `Display` on [`ApiError`] is the user-facing message; stores keep it as
//! their `error` string.

/// Errors from the ranking backend
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with an `{ "error": "..." }` envelope
    #[error("{0}")]
    Service(String),

    /// Non-success HTTP status
    #[error("{}", status_message(*status, message.as_deref()))]
    Status { status: u16, message: Option<String> },

    /// No response at all (connection refused, timeout, DNS)
    #[error("No response received from server. Please check that the backend is running. ({0})")]
    Unreachable(String),

    /// The response did not have the expected shape
    #[error("Unexpected response from server: {0}")]
    Decode(String),
}

fn status_message(status: u16, message: Option<&str>) -> String {
    match message {
        Some(message) => message.to_string(),
        None => format!("Request failed with status {}", status),
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Unreachable(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
