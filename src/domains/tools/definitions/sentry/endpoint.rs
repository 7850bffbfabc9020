//! Generic Sentry resource fetch.
//!
//! Every Sentry tool follows the same flow: validate arguments, pick the
//! effective field list, build the URL, GET it with the bearer token, then
//! shape the JSON body. [`Endpoint`] carries the per-tool data (metadata,
//! path template, query parameters, default fields, output key) and
//! [`fetch_resource`] runs the flow for any implementation.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

use super::client::SentryClient;
use super::common::{QueryPairs, error_result, read_only_annotations, structured_result};
use crate::domains::tools::{ToolError, fields::select_owned};

/// A read-only Sentry API endpoint exposed as an MCP tool.
pub trait Endpoint: Send + Sync + 'static {
    /// Tool arguments.
    type Params: DeserializeOwned + JsonSchema + Send + Sync + 'static;

    /// Shape of the structured content, used for the advertised output schema.
    type Output: JsonSchema + 'static;

    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Human-readable title.
    const TITLE: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Path template; `{name}` segments are filled from [`Endpoint::path_params`].
    const PATH: &'static str;

    /// Field list applied when the caller does not pass `fields`.
    const DEFAULT_FIELDS: &'static str;

    /// Key of the structured content object.
    const OUTPUT_KEY: &'static str;

    /// Values for the `{name}` placeholders of [`Endpoint::PATH`].
    fn path_params(params: &Self::Params) -> Vec<(&'static str, &str)>;

    /// Optional query-string parameters.
    fn query(_params: &Self::Params) -> QueryPairs {
        QueryPairs::new()
    }

    /// The caller-supplied field list, if any.
    fn fields(params: &Self::Params) -> Option<&str>;
}

/// Fill the placeholders of `template` and split it into path segments.
///
/// A leading slash is ignored; a trailing slash becomes a trailing empty
/// segment. Blank placeholder values are rejected, and so are `.` and `..`,
/// which URL normalization would otherwise resolve into another path.
pub fn render_path(template: &str, values: &[(&str, &str)]) -> Result<Vec<String>, ToolError> {
    template
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            let Some(name) = segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) else {
                return Ok(segment.to_string());
            };

            let value = values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value)
                .ok_or_else(|| {
                    ToolError::invalid_arguments(format!("missing path parameter `{}`", name))
                })?;

            if value.trim().is_empty() {
                return Err(ToolError::invalid_arguments(format!(
                    "`{}` must not be empty",
                    name
                )));
            }

            if matches!(value, "." | "..") {
                return Err(ToolError::invalid_arguments(format!(
                    "`{}` must not be a relative path segment",
                    name
                )));
            }

            Ok(value.to_string())
        })
        .collect()
}

/// Run one tool call against Sentry.
///
/// Never fails at the protocol level: validation, HTTP and decoding
/// problems all come back as an error result.
#[instrument(skip_all, fields(tool = E::NAME))]
pub async fn fetch_resource<E: Endpoint>(client: &SentryClient, arguments: JsonObject) -> CallToolResult {
    info!("Executing {} tool", E::NAME);

    match shaped_response::<E>(client, arguments).await {
        Ok(data) => structured_result(E::OUTPUT_KEY, data),
        Err(e) => {
            if e.is_validation() {
                warn!("Rejected {} call: {}", E::NAME, e);
            } else {
                error!("{} failed: {}", E::NAME, e);
            }
            error_result(&e.to_string())
        }
    }
}

async fn shaped_response<E: Endpoint>(
    client: &SentryClient,
    arguments: JsonObject,
) -> Result<Value, ToolError> {
    let params: E::Params = serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

    let fields = E::fields(&params).unwrap_or(E::DEFAULT_FIELDS);
    debug!("Effective fields for {}: {}", E::NAME, fields);

    let path = render_path(E::PATH, &E::path_params(&params))?;
    let url = client.resource_url(&path, &E::query(&params).into_pairs())?;

    let body = client.get_json(url).await?;
    Ok(select_owned(body, Some(fields)))
}

/// Create a Tool model for `E` (metadata).
pub fn to_tool<E: Endpoint>() -> Tool {
    Tool {
        name: E::NAME.into(),
        description: Some(E::DESCRIPTION.into()),
        input_schema: cached_schema_for_type::<E::Params>(),
        annotations: Some(read_only_annotations(E::TITLE)),
        output_schema: Some(cached_schema_for_type::<E::Output>()),
        icons: None,
        meta: None,
        title: Some(E::TITLE.into()),
    }
}
