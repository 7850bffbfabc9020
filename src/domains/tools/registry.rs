//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Dispatch of tool calls by name, the single entry point used by the
//!   router's routes
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, JsonObject, Tool},
};
use tracing::warn;

use super::ToolError;
use super::definitions::sentry::{
    Endpoint, GetProjectEvent, ListIssueEvents, ListOrganizations, ListProjectIssues,
    SentryClient, fetch_resource, to_tool,
};

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    client: Arc<SentryClient>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(client: Arc<SentryClient>) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            GetProjectEvent::NAME,
            ListIssueEvents::NAME,
            ListOrganizations::NAME,
            ListProjectIssues::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            to_tool::<GetProjectEvent>(),
            to_tool::<ListIssueEvents>(),
            to_tool::<ListOrganizations>(),
            to_tool::<ListProjectIssues>(),
        ]
    }

    /// Dispatch a tool call to the appropriate endpoint.
    ///
    /// Only an unknown tool name is an error; every failure of a known tool
    /// is reported inside the returned result.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: JsonObject,
    ) -> Result<CallToolResult, ToolError> {
        let client = self.client.as_ref();
        match name {
            GetProjectEvent::NAME => Ok(fetch_resource::<GetProjectEvent>(client, arguments).await),
            ListIssueEvents::NAME => Ok(fetch_resource::<ListIssueEvents>(client, arguments).await),
            ListOrganizations::NAME => {
                Ok(fetch_resource::<ListOrganizations>(client, arguments).await)
            }
            ListProjectIssues::NAME => {
                Ok(fetch_resource::<ListProjectIssues>(client, arguments).await)
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }

    /// Protocol-facing dispatch used by the MCP routes.
    ///
    /// Absent arguments are treated as an empty object; an unknown tool
    /// becomes an `invalid_params` protocol error.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        self.call_tool(name, arguments.unwrap_or_default())
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;

    fn test_registry() -> ToolRegistry {
        let config = Config::for_host("http://127.0.0.1:9", "token").unwrap();
        ToolRegistry::new(Arc::new(SentryClient::new(&config.sentry).unwrap()))
    }

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 4);
        assert!(names.contains(&"listOrganizations"));
        assert!(names.contains(&"listProjectIssues"));
        assert!(names.contains(&"listIssueEvents"));
        assert!(names.contains(&"getProjectEvent"));
    }

    #[test]
    fn test_tools_are_read_only_with_output_schema() {
        for tool in ToolRegistry::get_all_tools() {
            let annotations = tool.annotations.expect("annotations");
            assert_eq!(annotations.read_only_hint, Some(true));
            assert_eq!(annotations.destructive_hint, Some(false));
            assert!(tool.output_schema.is_some());
            assert!(tool.title.is_some());
        }
    }

    #[test]
    fn test_input_schema_marks_required_params() {
        let tool = to_tool::<ListIssueEvents>();
        let required = tool.input_schema.get("required").cloned().unwrap_or_default();
        let required: Vec<String> = serde_json::from_value(required).unwrap();
        assert!(required.contains(&"organizationIdOrSlug".to_string()));
        assert!(required.contains(&"issueId".to_string()));
        assert!(!required.contains(&"fields".to_string()));
    }

    #[tokio::test]
    async fn test_registry_call_unknown() {
        let result = test_registry()
            .call_tool("unknown", JsonObject::new())
            .await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_dispatch_unknown_is_protocol_error() {
        let err = test_registry().dispatch("unknown", None).await.unwrap_err();
        assert!(err.message.contains("Tool not found: unknown"));
    }

    #[tokio::test]
    async fn test_dispatch_without_arguments_validates_params() {
        let result = test_registry()
            .dispatch("listIssueEvents", None)
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn test_registry_call_missing_param_is_error_result() {
        let result = test_registry()
            .call_tool("getProjectEvent", JsonObject::new())
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
    }
}
