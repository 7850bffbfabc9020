//! List a Project's Issues tool.
//!
//! `GET /api/0/projects/{org}/{project}/issues/` returns the issues
//! (groups) bound to a project.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::QueryPairs;
use super::endpoint::Endpoint;

/// Parameters for listing a project's issues.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectIssuesParams {
    #[schemars(description = "The ID or slug of the organization.")]
    pub organization_id_or_slug: String,

    #[schemars(description = "The ID or slug of the project.")]
    pub project_id_or_slug: String,

    #[schemars(description = "Optional stat period (\"24h\", \"14d\", or \"\"). Defaults to \"24h\".")]
    pub stats_period: Option<String>,

    #[schemars(description = "If true, short IDs are looked up as well.")]
    pub short_id_lookup: Option<bool>,

    #[schemars(
        description = "Optional Sentry structured search query. Defaults to \"is:unresolved\"."
    )]
    pub query: Option<String>,

    #[schemars(description = "A comma-separated list of group hashes to return.")]
    pub hashes: Option<String>,

    #[schemars(description = "A pointer to the last object fetched.")]
    pub cursor: Option<String>,

    #[schemars(description = "A comma-separated list of fields to return.")]
    pub fields: Option<String>,
}

/// Structured output of the tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct IssuesOutput {
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: Option<String>,
    pub title: Option<String>,
    pub culprit: Option<String>,
    pub level: Option<String>,
    pub status: Option<String>,
    pub first_seen: Option<String>,
    pub last_seen: Option<String>,
    pub count: Option<String>,
    pub user_count: Option<u64>,
    pub short_id: Option<String>,
    pub project: Option<IssueProject>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct IssueProject {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// Sentry List a Project's Issues tool.
#[derive(Debug, Clone)]
pub struct ListProjectIssues;

impl Endpoint for ListProjectIssues {
    type Params = ListProjectIssuesParams;
    type Output = IssuesOutput;

    const NAME: &'static str = "listProjectIssues";
    const TITLE: &'static str = "List a Project's Issues";
    const DESCRIPTION: &'static str = "Return a list of issues (groups) bound to a project.";
    const PATH: &'static str = "/api/0/projects/{organizationIdOrSlug}/{projectIdOrSlug}/issues/";
    const DEFAULT_FIELDS: &'static str =
        "id,title,culprit,level,status,firstSeen,lastSeen,count,userCount,shortId";
    const OUTPUT_KEY: &'static str = "issues";

    fn path_params(params: &Self::Params) -> Vec<(&'static str, &str)> {
        vec![
            ("organizationIdOrSlug", params.organization_id_or_slug.as_str()),
            ("projectIdOrSlug", params.project_id_or_slug.as_str()),
        ]
    }

    fn query(params: &Self::Params) -> QueryPairs {
        QueryPairs::new()
            .text("statsPeriod", params.stats_period.as_deref())
            .flag("shortIdLookup", params.short_id_lookup, "1")
            .text("query", params.query.as_deref())
            .text("hashes", params.hashes.as_deref())
            .text("cursor", params.cursor.as_deref())
    }

    fn fields(params: &Self::Params) -> Option<&str> {
        params.fields.as_deref()
    }
}
