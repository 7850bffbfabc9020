//! List an Issue's Events tool.
//!
//! `GET /api/0/organizations/{org}/issues/{issueId}/events/` returns the
//! error events bound to an issue.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::QueryPairs;
use super::endpoint::Endpoint;

/// Parameters for listing an issue's events.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListIssueEventsParams {
    #[schemars(description = "The ID or slug of the organization.")]
    pub organization_id_or_slug: String,

    #[schemars(description = "The ID of the issue to query.")]
    pub issue_id: String,

    #[schemars(description = "Start of the time period in ISO-8601 format.")]
    pub start: Option<String>,

    #[schemars(description = "End of the time period in ISO-8601 format.")]
    pub end: Option<String>,

    #[schemars(
        description = "Time period for the query (e.g., \"24h\", \"14d\"). Overrides start/end."
    )]
    pub stats_period: Option<String>,

    #[schemars(description = "Name of environments to filter by.")]
    pub environment: Option<Vec<String>>,

    #[schemars(description = "Include the full event body and stacktrace.")]
    pub full: Option<bool>,

    #[schemars(description = "Return events in pseudo-random order.")]
    pub sample: Option<bool>,

    #[schemars(description = "Optional search query for filtering events.")]
    pub query: Option<String>,

    #[schemars(description = "A comma-separated list of fields to return.")]
    pub fields: Option<String>,
}

/// Structured output of the tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EventsOutput {
    pub events: Vec<IssueEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueEvent {
    pub id: Option<String>,
    #[serde(rename = "eventID")]
    pub event_id: Option<String>,
    pub title: Option<String>,
    pub culprit: Option<String>,
    pub platform: Option<String>,
    pub date_created: Option<String>,
    pub tags: Option<Vec<EventTag>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A `key`/`value` tag attached to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EventTag {
    pub key: String,
    pub value: String,
}

/// Sentry List an Issue's Events tool.
#[derive(Debug, Clone)]
pub struct ListIssueEvents;

impl Endpoint for ListIssueEvents {
    type Params = ListIssueEventsParams;
    type Output = EventsOutput;

    const NAME: &'static str = "listIssueEvents";
    const TITLE: &'static str = "List an Issue's Events";
    const DESCRIPTION: &'static str = "Return a list of error events bound to an issue.";
    const PATH: &'static str = "/api/0/organizations/{organizationIdOrSlug}/issues/{issueId}/events/";
    const DEFAULT_FIELDS: &'static str = "id,eventID,title,culprit,platform,dateCreated,tags";
    const OUTPUT_KEY: &'static str = "events";

    fn path_params(params: &Self::Params) -> Vec<(&'static str, &str)> {
        vec![
            ("organizationIdOrSlug", params.organization_id_or_slug.as_str()),
            ("issueId", params.issue_id.as_str()),
        ]
    }

    fn query(params: &Self::Params) -> QueryPairs {
        QueryPairs::new()
            .text("start", params.start.as_deref())
            .text("end", params.end.as_deref())
            .text("statsPeriod", params.stats_period.as_deref())
            .flag("full", params.full, "true")
            .flag("sample", params.sample, "true")
            .text("query", params.query.as_deref())
            .list("environment", params.environment.as_deref())
    }

    fn fields(params: &Self::Params) -> Option<&str> {
        params.fields.as_deref()
    }
}
