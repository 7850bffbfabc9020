//! Error types and handling for the MCP server.
//!
//! This module defines the process-level error type. Tool failures never
//! reach it during normal operation: they are turned into error results
//! for the calling client. It covers startup and transport failures.

use thiserror::Error;

use super::transport::TransportError;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure of the MCP transport.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
