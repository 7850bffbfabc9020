//! Tool-specific error types.
//!
//! Every variant renders to the message shown to the MCP client when a
//! tool call fails.

use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The target URL could not be built from the configured host.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// Sentry answered with a non-success status.
    #[error("API Error: {status} {reason}\n{body}")]
    Api {
        status: u16,
        reason: String,
        body: String,
    },

    /// The request could not be sent or its body could not be read.
    #[error("An unexpected error occurred: {}", describe_request_error(.0))]
    Request(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("An unexpected error occurred: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "invalid url" error.
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }

    /// Whether the failure happened before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidArguments(_) | Self::InvalidUrl(_))
    }
}

/// `err` followed by every distinct message of its source chain.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

fn describe_request_error(err: &reqwest::Error) -> String {
    let mut message = error_chain(err);
    if err.is_timeout() && !message.contains("timed out") {
        message.push_str(": operation timed out");
    }
    message
}
