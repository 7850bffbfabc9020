//! List Organizations tool.
//!
//! `GET /api/0/organizations/` returns the organizations available to the
//! authenticated token.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::QueryPairs;
use super::endpoint::Endpoint;

/// Parameters for listing organizations.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListOrganizationsParams {
    #[schemars(
        description = "Specify true to restrict results to organizations in which you are an owner."
    )]
    pub owner: Option<bool>,

    #[schemars(
        description = "A pointer to the last object fetched; used to retrieve the next or previous results."
    )]
    pub cursor: Option<String>,

    #[schemars(description = "Filters results by using Sentry query syntax.")]
    pub query: Option<String>,

    #[schemars(description = "The field to sort results by (members, projects, or events).")]
    pub sort_by: Option<String>,

    #[schemars(description = "A comma-separated list of fields to return (e.g., \"name,slug,id\").")]
    pub fields: Option<String>,
}

/// Structured output of the tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OrganizationsOutput {
    pub organizations: Vec<Organization>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: Option<String>,
    pub slug: Option<String>,
    pub name: Option<String>,
    pub date_created: Option<String>,
    pub status: Option<OrganizationStatus>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OrganizationStatus {
    pub id: String,
    pub name: String,
}

/// Sentry List Organizations tool.
#[derive(Debug, Clone)]
pub struct ListOrganizations;

impl Endpoint for ListOrganizations {
    type Params = ListOrganizationsParams;
    type Output = OrganizationsOutput;

    const NAME: &'static str = "listOrganizations";
    const TITLE: &'static str = "List Organizations";
    const DESCRIPTION: &'static str =
        "Return a list of organizations available to the authenticated session.";
    const PATH: &'static str = "/api/0/organizations/";
    const DEFAULT_FIELDS: &'static str = "id,name,status,slug";
    const OUTPUT_KEY: &'static str = "organizations";

    fn path_params(_params: &Self::Params) -> Vec<(&'static str, &str)> {
        Vec::new()
    }

    fn query(params: &Self::Params) -> QueryPairs {
        QueryPairs::new()
            .boolean("owner", params.owner)
            .text("cursor", params.cursor.as_deref())
            .text("query", params.query.as_deref())
            .text("sortBy", params.sort_by.as_deref())
    }

    fn fields(params: &Self::Params) -> Option<&str> {
        params.fields.as_deref()
    }
}
