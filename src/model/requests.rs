/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! Request descriptions for envelope API calls
//!
//! An [`ApiRequest`] is an opaque, immutable description of one HTTP call:
//! method, path, query parameters, headers, optional JSON body, and whether
//! the call opts out of the automatic credential-refresh retry. Callers build
//! it with the consuming builder methods and hand it to the client.

use crate::error::AppError;
use reqwest::Method;
use serde::Serialize;

/// Immutable description of an HTTP call against an envelope API
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    params: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    skip_auth_retry: bool,
}

impl ApiRequest {
    /// Creates a request with the given method and path
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - API endpoint path (e.g., "/users/1"); absolute `http…` URLs
    ///   are passed to the transport unchanged
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: Vec::new(),
            headers: Vec::new(),
            body: None,
            skip_auth_retry: false,
        }
    }

    /// Creates a GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Creates a POST request
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Creates a PUT request
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Creates a DELETE request
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Adds a query parameter
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Adds a header
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the JSON body
    ///
    /// # Errors
    /// Returns `AppError::Json` if the body cannot be serialized.
    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, AppError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Opts this request out of the automatic credential-refresh retry
    ///
    /// A 401/403 answer then propagates directly instead of triggering a
    /// forced refresh and replay.
    #[must_use]
    pub fn skip_auth_retry(mut self) -> Self {
        self.skip_auth_retry = true;
        self
    }

    /// HTTP method of this request
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Endpoint path of this request
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters in insertion order
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Headers in insertion order
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// JSON body, when one was set
    pub fn body(&self) -> Option<&serde_json::Value> {
        self.body.as_ref()
    }

    /// Whether this request opts out of the credential-refresh retry
    pub fn skips_auth_retry(&self) -> bool {
        self.skip_auth_retry
    }

    /// Stable key identifying this request for the response cache
    ///
    /// Method, path and query parameters participate; headers and body do not.
    #[must_use]
    pub fn cache_key(&self) -> String {
        let mut key = format!("{} {}", self.method, self.path);
        if !self.params.is_empty() {
            let query: Vec<String> = self
                .params
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect();
            key.push('?');
            key.push_str(&query.join("&"));
        }
        key
    }
}
