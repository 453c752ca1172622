/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 22/10/25
******************************************************************************/

//! # Envelope Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the library.
//!
//! ## Usage
//!
//! ```rust
//! use envelope_client::prelude::*;
//!
//! let config = Config::with_base_url("https://api.example.com");
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the envelope API client
pub use crate::config::{CacheConfig, Config, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, ApplicationError, TransportError};

// ============================================================================
// REQUEST AND RESPONSE MODELS
// ============================================================================

/// Request description built by the caller
pub use crate::model::requests::ApiRequest;

/// Envelope wire shape and decoding
pub use crate::model::responses::{Envelope, EnvelopeDecoder, JsonDecoder};

// ============================================================================
// EXECUTOR AND COLLABORATORS
// ============================================================================

/// Authenticated request executor
pub use crate::application::client::ApiClient;

/// Transport trait and raw response shape
pub use crate::transport::interface::{RawResponse, Transport};

/// reqwest-backed transport implementation
pub use crate::transport::http::HttpTransport;

/// Credential collaborator interface and implementations
pub use crate::session::interface::{Anonymous, Authenticator};
pub use crate::session::token::StaticToken;

// ============================================================================
// UTILITIES
// ============================================================================

/// In-memory TTL cache
pub use crate::cache::TtlCache;

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use reqwest::{Method, StatusCode};
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};
