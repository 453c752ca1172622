/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! # Envelope Client
//!
//! Async client library for REST backends that wrap every payload in an
//! application-level envelope `{code, message, data}`.
//!
//! The client executes a typed request through an injected transport, decodes
//! the envelope, and transparently recovers exactly once from an expired
//! credential: on a transport-level HTTP 401/403 it asks the externally-owned
//! authenticator for a forced refresh and replays the request. Application
//! failures (envelope code other than 200) and every other transport failure
//! propagate unchanged.
//!
//! All collaborators are passed in explicitly; the crate holds no global
//! state.
//!
//! # Example
//! ```ignore
//! use envelope_client::prelude::*;
//!
//! let config = Arc::new(Config::new());
//! let transport = Arc::new(HttpTransport::new(config)?);
//! let auth = Arc::new(StaticToken::new("token"));
//! let client = ApiClient::with_authenticator(transport, auth);
//!
//! let user: Option<User> = client.get("/users/1").await?;
//! ```

/// Authenticated request executor
pub mod application;
/// In-memory TTL cache for response bodies
pub mod cache;
/// Environment-driven configuration
pub mod config;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Request and response models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Credential collaborator interfaces
pub mod session;
/// HTTP transport collaborator
pub mod transport;
/// Environment and logging utilities
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
