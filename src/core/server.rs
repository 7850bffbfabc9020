//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool calls to the tool router.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/sentry/`, one file per
//! Sentry endpoint. The ToolRouter is built in `domains/tools/router.rs` and
//! every route dispatches through the `ToolRegistry`; adding a tool does not
//! require touching this file.

use rmcp::{
    ServerHandler,
    handler::server::tool::ToolRouter,
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool_handler,
};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::error;
use crate::domains::tools::{ToolRegistry, build_tool_router, definitions::sentry::SentryClient};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. It holds no
/// per-call state: every tool call is independent.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> error::Result<Self> {
        let client = Arc::new(SentryClient::new(&config.sentry)?);
        info!("Sentry client ready for {}", client.host());

        let registry = Arc::new(ToolRegistry::new(client));

        Ok(Self {
            tool_router: build_tool_router::<Self>(registry),
            config: Arc::new(config),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Names of the registered tools.
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Read-only access to a Sentry installation: list organizations, a project's \
                 issues, an issue's events, and fetch a single event with its stacktrace. \
                 Every tool accepts a comma-separated `fields` argument to narrow the response."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
