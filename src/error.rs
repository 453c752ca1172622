/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! Error types for the envelope client
//!
//! Two failure kinds cross the API boundary: transport failures (a network
//! error or a non-success HTTP status) and application failures (an envelope
//! code other than the success code). Only transport-level 401/403 answers are
//! eligible for the single credential-refresh retry; everything else
//! propagates unchanged to the caller.

use reqwest::StatusCode;
use std::fmt;

/// Transport-level failure: the HTTP exchange itself went wrong
#[derive(Debug)]
pub enum TransportError {
    /// Network failure, no usable status code was received
    Network(reqwest::Error),
    /// The server answered with a non-success HTTP status
    Status(StatusCode),
}

impl TransportError {
    /// HTTP status associated with this failure, when one was received
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TransportError::Network(e) => e.status(),
            TransportError::Status(status) => Some(*status),
        }
    }

    /// Whether this failure is an authorization failure (HTTP 401/403)
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Network(e) => write!(f, "network error: {e}"),
            TransportError::Status(status) => write!(f, "unexpected status: {status}"),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::Network(e) => Some(e),
            TransportError::Status(_) => None,
        }
    }
}

/// Application-level failure: the envelope carried a non-success code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationError {
    /// Code reported in the envelope
    pub code: i64,
    /// Message from the envelope, when present
    pub message: Option<String>,
}

impl fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "application error {}: {}", self.code, message),
            None => write!(f, "application error {}", self.code),
        }
    }
}

impl std::error::Error for ApplicationError {}

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// HTTP exchange failed
    Transport(TransportError),
    /// Envelope code was not the success code
    Application(ApplicationError),
    /// JSON serialization or deserialization failure
    Json(serde_json::Error),
    /// IO failure
    Io(std::io::Error),
    /// Caller provided invalid input
    InvalidInput(String),
}

impl AppError {
    /// HTTP status carried by this error, when available
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Transport(e) => e.status(),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Transport(e) => write!(f, "{e}"),
            AppError::Application(e) => write!(f, "{e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Transport(e) => Some(e),
            AppError::Application(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::InvalidInput(_) => None,
        }
    }
}

impl From<TransportError> for AppError {
    fn from(e: TransportError) -> Self {
        AppError::Transport(e)
    }
}

impl From<ApplicationError> for AppError {
    fn from(e: ApplicationError) -> Self {
        AppError::Application(e)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Transport(TransportError::Network(e))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
