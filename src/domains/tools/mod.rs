//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//!
//! ## Architecture
//!
//! - `definitions/` - Sentry endpoint definitions and the generic fetch
//! - `fields.rs` - Field picking applied to every response
//! - `router.rs` - ToolRouter builder for the stdio transport
//! - `registry.rs` - Tool metadata and dispatch by name
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/sentry/` with a params struct, an
//!    output struct and an `Endpoint` implementation
//! 2. Export it in `definitions/sentry/mod.rs`
//! 3. Add a route in `router.rs` and a match arm in `registry.rs`

pub mod definitions;
mod error;
pub mod fields;
mod registry;
pub mod router;

pub use error::ToolError;
pub use fields::{FieldSpec, select, select_owned};
pub use registry::ToolRegistry;
pub use router::build_tool_router;
