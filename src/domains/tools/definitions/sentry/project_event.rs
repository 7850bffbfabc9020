//! Retrieve an Event for a Project tool.
//!
//! `GET /api/0/projects/{org}/{project}/events/{eventId}/` returns one
//! event including its entries (stacktrace, breadcrumbs, request...).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::endpoint::Endpoint;
use super::issue_events::EventTag;

/// Parameters for retrieving a single event.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetProjectEventParams {
    #[schemars(description = "The ID or slug of the organization.")]
    pub organization_id_or_slug: String,

    #[schemars(description = "The ID or slug of the project.")]
    pub project_id_or_slug: String,

    #[schemars(description = "The hexadecimal ID of the event to retrieve.")]
    pub event_id: String,

    #[schemars(description = "A comma-separated list of fields to return.")]
    pub fields: Option<String>,
}

/// Structured output of the tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EventOutput {
    pub event: ProjectEvent,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEvent {
    #[serde(rename = "eventID")]
    pub event_id: Option<String>,
    pub title: Option<String>,
    pub culprit: Option<String>,
    pub platform: Option<String>,
    pub date_created: Option<String>,
    pub tags: Option<Vec<EventTag>>,
    pub entries: Option<Vec<Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Sentry Retrieve an Event for a Project tool.
#[derive(Debug, Clone)]
pub struct GetProjectEvent;

impl Endpoint for GetProjectEvent {
    type Params = GetProjectEventParams;
    type Output = EventOutput;

    const NAME: &'static str = "getProjectEvent";
    const TITLE: &'static str = "Retrieve an Event for a Project";
    const DESCRIPTION: &'static str =
        "Return details on an individual event, including stacktrace.";
    const PATH: &'static str =
        "/api/0/projects/{organizationIdOrSlug}/{projectIdOrSlug}/events/{eventId}/";
    const DEFAULT_FIELDS: &'static str = "eventID,title,culprit,dateCreated,tags,entries,platform";
    const OUTPUT_KEY: &'static str = "event";

    fn path_params(params: &Self::Params) -> Vec<(&'static str, &str)> {
        vec![
            ("organizationIdOrSlug", params.organization_id_or_slug.as_str()),
            ("projectIdOrSlug", params.project_id_or_slug.as_str()),
            ("eventId", params.event_id.as_str()),
        ]
    }

    fn fields(params: &Self::Params) -> Option<&str> {
        params.fields.as_deref()
    }
}
