//! Sentry API MCP Server Library
//!
//! This crate exposes read-only Sentry REST endpoints as Model Context
//! Protocol (MCP) tools served over stdio.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and
//!   the stdio transport
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the Sentry tools and the field picking applied to their
//!     responses
//!
//! # Example
//!
//! ```rust,no_run
//! use sentry_mcp_server::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::for_host("https://sentry.io", "my-token")?;
//!     let server = McpServer::new(config)?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, McpServer, Result};
