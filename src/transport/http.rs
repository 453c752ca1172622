/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 21/10/25
******************************************************************************/

//! reqwest-backed transport for envelope APIs

use crate::config::Config;
use crate::error::AppError;
use crate::model::requests::ApiRequest;
use crate::transport::interface::{RawResponse, Transport};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// HTTP transport built on reqwest
///
/// Applies the configured base URL, user agent and request timeout. The
/// timeout set here is the only deadline in the crate.
pub struct HttpTransport {
    client: Client,
    config: Arc<Config>,
}

impl HttpTransport {
    /// Creates a transport from the given configuration
    ///
    /// # Errors
    /// Returns `AppError::Transport` if the underlying HTTP client cannot be
    /// built.
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self { client, config })
    }

    /// Builds the full URL for a request path
    ///
    /// Absolute `http…` paths pass through unchanged.
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            let path = path.trim_start_matches('/');
            format!("{}/{}", self.config.rest_api.base_url, path)
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        request: &ApiRequest,
        token: Option<&str>,
    ) -> Result<RawResponse, AppError> {
        let url = self.build_url(request.path());

        debug!("{} {}", request.method(), url);

        let mut builder = self
            .client
            .request(request.method().clone(), &url)
            .header("Content-Type", "application/json; charset=UTF-8")
            .header("Accept", "application/json; charset=UTF-8");

        if !request.params().is_empty() {
            builder = builder.query(request.params());
        }

        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }

        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }

        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        let body = response.bytes().await?.to_vec();
        Ok(RawResponse { status, body })
    }
}
