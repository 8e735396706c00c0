//! HTTP transport client for the Flowise REST API.
//!
//! Every call is a single request against `{base_url}/api/v1{endpoint}`.
//! There is no caching and no retry: a failed attempt is returned to the
//! caller as-is.

use async_trait::async_trait;
use reqwest::{Client, Method, header::CONTENT_TYPE};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::error::{FlowiseError, FlowiseResult};
use crate::core::config::FlowiseConfig;

/// Fixed path prefix of the Flowise REST API.
pub const API_PREFIX: &str = "/api/v1";

/// Request/response access to the Flowise REST API.
///
/// Implemented by [`FlowiseClient`]; tool dispatchers only see this trait so
/// they can be exercised against test doubles.
#[async_trait]
pub trait FlowiseApi: Send + Sync {
    /// Perform one request and return the parsed JSON body.
    ///
    /// `endpoint` is appended verbatim to the API prefix and must start
    /// with `/`. When `body` is `None` no request body is sent.
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> FlowiseResult<Value>;
}

/// reqwest-backed Flowise client.
///
/// Holds only immutable configuration, so one instance can be shared by all
/// tool routes and called concurrently.
#[derive(Clone)]
pub struct FlowiseClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl FlowiseClient {
    /// Build a client from the Flowise section of the server config.
    pub fn new(config: &FlowiseConfig) -> FlowiseResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("flowise-mcp-server/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FlowiseError::client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Full URL for an endpoint.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, endpoint)
    }
}

#[async_trait]
impl FlowiseApi for FlowiseClient {
    #[instrument(skip(self, body))]
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> FlowiseResult<Value> {
        let url = self.url(endpoint);
        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");

        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        if let Some(body) = body {
            request = request.body(serde_json::to_string(&body)?);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            warn!("Flowise returned {} for {}", status.as_u16(), url);
            return Err(FlowiseError::api(status.as_u16(), text));
        }

        Ok(serde_json::from_str(&text)?)
    }
}
