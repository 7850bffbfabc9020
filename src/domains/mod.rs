//! Domains module containing business logic organized by bounded contexts.
//!
//! The server only exposes tools; each tool wraps one Sentry API endpoint.

pub mod tools;
