//! Tool definitions module.
//!
//! This module exports all available tool definitions.

pub mod sentry;

pub use sentry::{GetProjectEvent, ListIssueEvents, ListOrganizations, ListProjectIssues};
