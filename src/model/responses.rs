/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! Envelope response models and decoding
//!
//! Every payload on the wire is wrapped in `{code, message, data}`. Payload
//! types follow the snake_case-in-Rust / camelCase-on-the-wire convention via
//! `#[serde(rename_all = "camelCase")]`.

use crate::constants::SUCCESS_CODE;
use crate::error::{AppError, ApplicationError};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Wire envelope wrapped around every payload
///
/// `code == 200` signals success; any other code is an application-level
/// error carrying `message`. `data` may legitimately be absent even on
/// success.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    /// Application-level status code
    pub code: i64,
    /// Human-readable message, usually present on failures
    pub message: Option<String>,
    /// Actual payload, absent for operations with no result
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Whether the envelope carries the success code
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Unwraps the payload, converting a non-success code into an error
    ///
    /// # Returns
    /// * `Ok(Option<T>)` - The payload, possibly absent
    /// * `Err(AppError::Application)` - When the code is not the success code
    pub fn into_data(self) -> Result<Option<T>, AppError> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(AppError::Application(ApplicationError {
                code: self.code,
                message: self.message,
            }))
        }
    }
}

/// Decoder collaborator: parses raw response bytes into an [`Envelope`]
pub trait EnvelopeDecoder: Send + Sync {
    /// Decodes the raw body of a response
    ///
    /// # Errors
    /// Returns `AppError::Json` when the bytes are not a valid envelope.
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<Envelope<T>, AppError>;
}

/// JSON decoder used by default
#[derive(Debug, Clone, Default)]
pub struct JsonDecoder;

impl EnvelopeDecoder for JsonDecoder {
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<Envelope<T>, AppError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
