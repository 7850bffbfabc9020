//! Transport layer for the MCP server.
//!
//! MCP clients talk to this server over standard input/output. The
//! transport owns the connection lifecycle and hands every message to the
//! [`McpServer`](crate::core::McpServer) handler.

mod error;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
