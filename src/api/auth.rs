//! UserAuthentication concept.

use serde::Deserialize;
use serde_json::json;

use super::client::ApiClient;
use super::error::ApiError;

#[derive(Debug, Deserialize)]
struct UserResponse {
    user: String,
}

#[derive(Debug, Deserialize)]
struct UsernameResponse {
    username: String,
}

/// Registration, login and account management
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Create an account and return the new user ID
    pub async fn register(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let body = json!({ "username": username, "password": password });
        let response: UserResponse = self
            .client
            .post("/UserAuthentication/register", &body)
            .await?;
        Ok(response.user)
    }

    /// Check credentials and return the user ID
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let body = json!({ "username": username, "password": password });
        let response: UserResponse = self
            .client
            .post("/UserAuthentication/authenticate", &body)
            .await?;
        Ok(response.user)
    }

    pub async fn delete(&self, user: &str) -> Result<(), ApiError> {
        self.client
            .post_unit("/UserAuthentication/delete", &json!({ "user": user }))
            .await
    }

    pub async fn change_password(
        &self,
        user: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let body = json!({
            "user": user,
            "oldPassword": old_password,
            "newPassword": new_password,
        });
        self.client
            .post_unit("/UserAuthentication/changePassword", &body)
            .await
    }

    pub async fn change_username(
        &self,
        user: &str,
        new_username: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        let body = json!({
            "user": user,
            "newUsername": new_username,
            "password": password,
        });
        self.client
            .post_unit("/UserAuthentication/changeUsername", &body)
            .await
    }

    /// User ID for a username, if one exists
    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<String>, ApiError> {
        let rows: Vec<UserResponse> = self
            .client
            .post(
                "/UserAuthentication/_getUserByUsername",
                &json!({ "username": username }),
            )
            .await?;
        Ok(rows.into_iter().next().map(|r| r.user))
    }

    /// Username for a user ID, if one exists
    pub async fn get_username(&self, user: &str) -> Result<Option<String>, ApiError> {
        let rows: Vec<UsernameResponse> = self
            .client
            .post("/UserAuthentication/_getUsername", &json!({ "user": user }))
            .await?;
        Ok(rows.into_iter().next().map(|r| r.username))
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_user_response() {
        let response: UserResponse = serde_json::from_str(r#"{"user": "019a-user"}"#).unwrap();
        assert_eq!(response.user, "019a-user");
    }

    #[test]
    fn test_parse_username_rows() {
        let rows: Vec<UsernameResponse> =
            serde_json::from_str(r#"[{"username": "alice"}]"#).unwrap();
        assert_eq!(rows[0].username, "alice");
    }
}
