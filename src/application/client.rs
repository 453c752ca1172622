/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 22/10/25
******************************************************************************/

//! Authenticated request executor for envelope APIs
//!
//! This module provides a client that handles:
//! - Executing typed requests through an injected transport
//! - Decoding the `{code, message, data}` envelope
//! - Transparent recovery from an expired credential: on a transport-level
//!   401/403 the configured authenticator is asked for a forced refresh and
//!   the request is replayed exactly once
//!
//! # Example
//! ```ignore
//! use envelope_client::application::client::ApiClient;
//! use envelope_client::config::Config;
//! use envelope_client::session::StaticToken;
//! use envelope_client::transport::HttpTransport;
//! use std::sync::Arc;
//!
//! let config = Arc::new(Config::new());
//! let transport = Arc::new(HttpTransport::new(config)?);
//! let auth = Arc::new(StaticToken::new("token"));
//! let client = ApiClient::with_authenticator(transport, auth);
//!
//! let user: Option<User> = client.get("/users/1").await?;
//! ```

use crate::cache::TtlCache;
use crate::error::{AppError, TransportError};
use crate::model::requests::ApiRequest;
use crate::model::responses::{Envelope, EnvelopeDecoder, JsonDecoder};
use crate::session::interface::{Anonymous, Authenticator};
use crate::transport::interface::{RawResponse, Transport};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Client executing requests against an envelope API
///
/// Collaborators are injected explicitly: a [`Transport`] performs the HTTP
/// exchange, an optional [`Authenticator`] owns credential state, and an
/// [`EnvelopeDecoder`] parses response bodies. A single logical request is
/// attempted at most twice, and no state is retained across logically
/// distinct requests.
pub struct ApiClient<T, A = Anonymous, D = JsonDecoder> {
    transport: Arc<T>,
    authenticator: Option<Arc<A>>,
    decoder: D,
    cache: Arc<TtlCache<String, Vec<u8>>>,
}

impl<T: Transport> ApiClient<T> {
    /// Creates a client with no authenticator
    ///
    /// Requests are sent without credentials, and 401/403 answers propagate
    /// without any retry.
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            transport,
            authenticator: None,
            decoder: JsonDecoder,
            cache: Arc::new(TtlCache::new()),
        }
    }
}

impl<T: Transport, A: Authenticator> ApiClient<T, A> {
    /// Creates a client with the given authenticator
    ///
    /// # Arguments
    /// * `transport` - Collaborator performing the HTTP exchange
    /// * `authenticator` - Externally-owned credential collaborator
    pub fn with_authenticator(transport: Arc<T>, authenticator: Arc<A>) -> Self {
        Self {
            transport,
            authenticator: Some(authenticator),
            decoder: JsonDecoder,
            cache: Arc::new(TtlCache::new()),
        }
    }
}

impl<T: Transport, A: Authenticator, D: EnvelopeDecoder> ApiClient<T, A, D> {
    /// Replaces the decoder collaborator
    #[must_use]
    pub fn with_decoder<D2: EnvelopeDecoder>(self, decoder: D2) -> ApiClient<T, A, D2> {
        ApiClient {
            transport: self.transport,
            authenticator: self.authenticator,
            decoder,
            cache: self.cache,
        }
    }

    /// Shared handle to the response cache
    pub fn cache(&self) -> &Arc<TtlCache<String, Vec<u8>>> {
        &self.cache
    }

    /// Makes a GET request
    ///
    /// # Arguments
    /// * `path` - API endpoint path (e.g., "/users/1")
    ///
    /// # Returns
    /// * `Ok(Option<R>)` - The envelope's payload, possibly absent
    /// * `Err(AppError)` - If the request fails
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<Option<R>, AppError> {
        self.execute(&ApiRequest::get(path)).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<R>, AppError> {
        self.execute(&ApiRequest::post(path).json(body)?).await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<R>, AppError> {
        self.execute(&ApiRequest::put(path).json(body)?).await
    }

    /// Makes a DELETE request
    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<Option<R>, AppError> {
        self.execute(&ApiRequest::delete(path)).await
    }

    /// Executes a request and decodes its envelope
    ///
    /// On success returns the envelope's `data`, which may legitimately be
    /// absent. A non-success envelope code fails with `AppError::Application`
    /// and is never retried; transport failures fail with
    /// `AppError::Transport`.
    ///
    /// On HTTP 401/403, when the request has not opted out and an
    /// authenticator is configured, a forced credential refresh is requested
    /// and the request is replayed exactly once, whatever the refresh
    /// reported. The replay's outcome is terminal.
    pub async fn execute<R: DeserializeOwned>(
        &self,
        request: &ApiRequest,
    ) -> Result<Option<R>, AppError> {
        let raw = self.execute_raw(request).await?;
        let envelope: Envelope<R> = self.decoder.decode(&raw.body)?;
        envelope.into_data()
    }

    /// Executes a request through the response cache
    ///
    /// A fresh cached body is decoded without touching the transport. On a
    /// miss the request is executed normally, and the raw body is stored for
    /// `ttl` only when both the HTTP status and the envelope code are
    /// successful.
    pub async fn execute_cached<R: DeserializeOwned>(
        &self,
        request: &ApiRequest,
        ttl: Duration,
    ) -> Result<Option<R>, AppError> {
        let key = request.cache_key();

        if let Some(body) = self.cache.get(&key).await {
            debug!("Cache hit: {}", key);
            let envelope: Envelope<R> = self.decoder.decode(&body)?;
            return envelope.into_data();
        }

        let raw = self.execute_raw(request).await?;
        let envelope: Envelope<R> = self.decoder.decode(&raw.body)?;

        if envelope.is_success() {
            self.cache.insert(key, raw.body, ttl).await;
        }

        envelope.into_data()
    }

    /// Runs the two-attempt exchange and maps non-success statuses to errors
    async fn execute_raw(&self, request: &ApiRequest) -> Result<RawResponse, AppError> {
        let first = self.attempt(request).await?;

        if first.is_auth_failure() && !request.skips_auth_retry() {
            if let Some(auth) = &self.authenticator {
                warn!(
                    "Authorization failure ({}), forcing credential refresh and retrying",
                    first.status
                );

                // The retry goes ahead even when the refresh reports failure;
                // the second attempt then fails cleanly on its own.
                if !auth.ensure_authenticated(true).await {
                    debug!("Credential refresh reported failure, retrying anyway");
                }

                let second = self.attempt(request).await?;
                return Self::check_status(second);
            }
        }

        Self::check_status(first)
    }

    /// Performs one exchange with the current credential
    async fn attempt(&self, request: &ApiRequest) -> Result<RawResponse, AppError> {
        let token = match &self.authenticator {
            Some(auth) => auth.token().await,
            None => None,
        };

        self.transport.send(request, token.as_deref()).await
    }

    fn check_status(raw: RawResponse) -> Result<RawResponse, AppError> {
        if raw.is_success() {
            Ok(raw)
        } else {
            error!("Request failed with status {}", raw.status);
            Err(AppError::Transport(TransportError::Status(raw.status)))
        }
    }
}
