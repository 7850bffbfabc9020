//! Authenticated HTTP access to the Sentry REST API.

use reqwest::{Url, header::ACCEPT};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::core::config::SentryConfig;
use crate::domains::tools::ToolError;

/// Thin wrapper around a pooled `reqwest` client bound to one Sentry host
/// and access token.
///
/// The client is immutable once built and is shared between concurrent
/// tool calls.
#[derive(Clone)]
pub struct SentryClient {
    http: reqwest::Client,
    host: Url,
    access_token: String,
}

impl std::fmt::Debug for SentryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentryClient")
            .field("host", &self.host.as_str())
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

impl SentryClient {
    /// Build a client from validated configuration.
    pub fn new(config: &SentryConfig) -> Result<Self, ToolError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            host: config.host.clone(),
            access_token: config.access_token.clone(),
        })
    }

    /// The configured Sentry host.
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Build the absolute URL for `path` on the configured host.
    ///
    /// `path` holds already-rendered segments (`["api", "0", "organizations", ""]`);
    /// each one is percent-encoded as a single path segment, and a trailing
    /// empty segment yields a trailing slash. Query pairs are appended in
    /// order.
    pub fn resource_url(&self, path: &[String], query: &[(&str, String)]) -> Result<Url, ToolError> {
        let mut url = self.host.clone();
        url.set_query(None);
        url.set_fragment(None);

        url.path_segments_mut()
            .map_err(|_| ToolError::invalid_url(format!("cannot build a path on {}", self.host)))?
            .clear()
            .extend(path);

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }

    /// GET `url` with the bearer token and decode the JSON body.
    ///
    /// Non-success responses become [`ToolError::Api`] carrying the status
    /// line and the raw body text.
    #[instrument(skip_all, fields(path = %url.path()))]
    pub async fn get_json(&self, url: Url) -> Result<Value, ToolError> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        debug!("Sentry responded with {}", status);

        if !status.is_success() {
            let body = response.text().await?;
            return Err(ToolError::Api {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
