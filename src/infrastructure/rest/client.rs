//! REST adapter for the remote user API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, warn};

use super::dto::{CreateUserBody, UpdateUserBody, UserDto};
use crate::domain::entities::{UserDraft, UserId, UserRecord};
use crate::domain::errors::ApiError;
use crate::domain::ports::UserApiPort;

/// Default API base URL.
pub const DEFAULT_API_BASE: &str = "https://jsonplaceholder.typicode.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the user REST resource.
pub struct RestUserClient {
    client: Client,
    base_url: String,
}

impl RestUserClient {
    /// Creates a client against the default base URL.
    ///
    /// # Errors
    /// Returns an error if HTTP client creation fails.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_API_BASE)
    }

    /// Creates a client against a custom base URL.
    ///
    /// # Errors
    /// Returns an error if HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::transport(format!("failed to create HTTP client: {e}")))?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn user_url(&self, id: UserId) -> String {
        format!("{}/users/{id}", self.base_url)
    }

    fn map_send_error(error: &reqwest::Error) -> ApiError {
        if error.is_timeout() {
            ApiError::Timeout
        } else if error.is_connect() {
            ApiError::transport("failed to connect to the user API")
        } else {
            ApiError::transport(error.to_string())
        }
    }

    fn check_status(status: StatusCode) -> Result<(), ApiError> {
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::status(status.as_u16()))
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "Request to user API failed");
            Self::map_send_error(&e)
        })?;
        Self::check_status(response.status())?;
        Ok(response)
    }

    async fn decode_user(response: Response) -> Result<UserRecord, ApiError> {
        let dto: UserDto = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse user response");
            ApiError::decode(e.to_string())
        })?;
        Ok(dto.into())
    }
}

#[async_trait]
impl UserApiPort for RestUserClient {
    async fn list_users(&self) -> Result<Vec<UserRecord>, ApiError> {
        debug!("Fetching user list");

        let response = self.send(self.client.get(self.users_url())).await?;
        let dtos: Vec<UserDto> = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse user list");
            ApiError::decode(e.to_string())
        })?;

        debug!(count = dtos.len(), "User list fetched");
        Ok(dtos.into_iter().map(UserRecord::from).collect())
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<UserRecord, ApiError> {
        debug!(name = %draft.name, "Creating user");

        let request = self
            .client
            .post(self.users_url())
            .json(&CreateUserBody::from_draft(draft));
        let response = self.send(request).await?;

        Self::decode_user(response).await
    }

    async fn update_user(&self, id: UserId, draft: &UserDraft) -> Result<UserRecord, ApiError> {
        debug!(id = %id, "Updating user");

        let request = self
            .client
            .put(self.user_url(id))
            .json(&UpdateUserBody::from_draft(id, draft));
        let response = self.send(request).await?;

        Self::decode_user(response).await
    }

    async fn delete_user(&self, id: UserId) -> Result<(), ApiError> {
        debug!(id = %id, "Deleting user");

        self.send(self.client.delete(self.user_url(id))).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        assert!(RestUserClient::new().is_ok());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = RestUserClient::with_base_url("http://localhost:3000/").unwrap();
        assert_eq!(client.users_url(), "http://localhost:3000/users");
        assert_eq!(client.user_url(UserId(5)), "http://localhost:3000/users/5");
    }

    #[test]
    fn test_status_check() {
        assert!(RestUserClient::check_status(StatusCode::OK).is_ok());
        assert!(RestUserClient::check_status(StatusCode::CREATED).is_ok());
        assert!(matches!(
            RestUserClient::check_status(StatusCode::INTERNAL_SERVER_ERROR),
            Err(ApiError::Status { status: 500 })
        ));
    }
}
