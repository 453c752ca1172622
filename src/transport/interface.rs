use crate::error::AppError;
use crate::model::requests::ApiRequest;
use async_trait::async_trait;
use reqwest::StatusCode;

/// Raw result of an HTTP exchange: status code plus body bytes
///
/// The transport never interprets the status; the executor does.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status returned by the server
    pub status: StatusCode,
    /// Raw body bytes
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Whether the status is in the 2xx range
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Whether the status is an authorization failure (HTTP 401/403)
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self.status,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        )
    }
}

/// Trait for sending HTTP-shaped requests
///
/// Deadlines are the transport's concern; the executor implements no timeout
/// logic of its own.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request, attaching the bearer credential when given
    ///
    /// Returns the status and raw body for any answer the server produced.
    ///
    /// # Errors
    /// Fails with `AppError::Transport` only on network-level errors.
    async fn send(
        &self,
        request: &ApiRequest,
        token: Option<&str>,
    ) -> Result<RawResponse, AppError>;
}
