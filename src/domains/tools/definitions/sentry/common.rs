//! Common utilities shared across Sentry tools.
//!
//! Result builders, tool annotations and query-string assembly.

use rmcp::model::{CallToolResult, Content, ToolAnnotations};
use serde_json::{Map, Value};

/// Create an error result with a formatted message.
///
/// Callers log the failure; this only builds the result.
pub fn error_result(message: &str) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result carrying `data` as pretty-printed text and as
/// structured content under `key`.
pub fn structured_result(key: &str, data: Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(&data).unwrap_or_else(|_| data.to_string());
    let mut result = CallToolResult::success(vec![Content::text(text)]);
    let mut structured = Map::new();
    structured.insert(key.to_string(), data);
    result.structured_content = Some(Value::Object(structured));
    result
}

/// Annotations shared by every Sentry tool: all of them are plain GETs.
pub fn read_only_annotations(title: &str) -> ToolAnnotations {
    ToolAnnotations::with_title(title)
        .read_only(true)
        .destructive(false)
        .idempotent(true)
        .open_world(true)
}

/// Ordered query-string pairs, appended only for parameters that were
/// actually supplied.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryPairs(Vec<(&'static str, String)>);

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=value` unless the value is missing or empty.
    pub fn text(mut self, key: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.0.push((key, value.to_string()));
        }
        self
    }

    /// Append `key=true` or `key=false` whenever the flag was supplied.
    pub fn boolean(mut self, key: &'static str, value: Option<bool>) -> Self {
        if let Some(value) = value {
            self.0.push((key, value.to_string()));
        }
        self
    }

    /// Append `key=<literal>` only when the flag is set to `true`.
    pub fn flag(mut self, key: &'static str, value: Option<bool>, literal: &str) -> Self {
        if value == Some(true) {
            self.0.push((key, literal.to_string()));
        }
        self
    }

    /// Append one `key=<item>` pair per list element, in order.
    pub fn list(mut self, key: &'static str, values: Option<&[String]>) -> Self {
        for value in values.unwrap_or_default() {
            self.0.push((key, value.clone()));
        }
        self
    }

    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;

    #[test]
    fn test_query_pairs_skip_missing_and_empty() {
        let pairs = QueryPairs::new()
            .text("cursor", None)
            .text("query", Some(""))
            .text("sortBy", Some("members"))
            .into_pairs();
        assert_eq!(pairs, vec![("sortBy", "members".to_string())]);
    }

    #[test]
    fn test_query_pairs_boolean_literals() {
        let pairs = QueryPairs::new()
            .boolean("owner", Some(false))
            .flag("shortIdLookup", Some(true), "1")
            .flag("full", Some(false), "true")
            .flag("sample", None, "true")
            .into_pairs();
        assert_eq!(
            pairs,
            vec![
                ("owner", "false".to_string()),
                ("shortIdLookup", "1".to_string())
            ]
        );
    }

    #[test]
    fn test_query_pairs_list_keeps_order() {
        let envs = vec!["prod".to_string(), "dev".to_string()];
        let pairs = QueryPairs::new().list("environment", Some(envs.as_slice())).into_pairs();
        assert_eq!(
            pairs,
            vec![
                ("environment", "prod".to_string()),
                ("environment", "dev".to_string())
            ]
        );
    }

    #[test]
    fn test_structured_result_shape() {
        let result = structured_result("issues", json!([{"id": "1"}]));
        assert_eq!(result.is_error, Some(false));
        assert_eq!(
            result.structured_content,
            Some(json!({"issues": [{"id": "1"}]}))
        );
        if let RawContent::Text(text) = &result.content[0].raw {
            assert!(text.text.contains("\"id\": \"1\""));
        } else {
            panic!("expected text content");
        }
    }

    #[test]
    fn test_error_result_sets_flag() {
        let result = error_result("API Error: 404 Not Found");
        assert_eq!(result.is_error, Some(true));
        assert!(result.structured_content.is_none());
    }
}
