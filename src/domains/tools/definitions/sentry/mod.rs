//! Sentry API tools module.
//!
//! Read-only tools backed by the Sentry REST API:
//! - `organizations`: organizations visible to the token
//! - `project_issues`: issues of a project
//! - `issue_events`: events of an issue
//! - `project_event`: a single event with its stacktrace
//!
//! All of them run through the generic fetch in `endpoint`.

pub mod client;
pub mod common;
pub mod endpoint;
pub mod issue_events;
pub mod organizations;
pub mod project_event;
pub mod project_issues;

pub use client::SentryClient;
pub use endpoint::{Endpoint, fetch_resource, to_tool};
pub use issue_events::{ListIssueEvents, ListIssueEventsParams};
pub use organizations::{ListOrganizations, ListOrganizationsParams};
pub use project_event::{GetProjectEvent, GetProjectEventParams};
pub use project_issues::{ListProjectIssues, ListProjectIssuesParams};
