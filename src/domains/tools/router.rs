//! Tool Router - builds the rmcp ToolRouter.
//!
//! Each route carries the tool's metadata and forwards the call to the
//! shared [`ToolRegistry`], so the registry is the only dispatch path.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter};

use super::definitions::sentry::{
    Endpoint, GetProjectEvent, ListIssueEvents, ListOrganizations, ListProjectIssues, to_tool,
};
use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: Arc<ToolRegistry>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(route::<GetProjectEvent, S>(registry.clone()))
        .with_route(route::<ListIssueEvents, S>(registry.clone()))
        .with_route(route::<ListOrganizations, S>(registry.clone()))
        .with_route(route::<ListProjectIssues, S>(registry))
}

/// Create a ToolRoute for `E` that dispatches through `registry`.
fn route<E, S>(registry: Arc<ToolRegistry>) -> ToolRoute<S>
where
    E: Endpoint,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(to_tool::<E>(), move |ctx: ToolCallContext<'_, S>| {
        let arguments = ctx.arguments.clone();
        let registry = registry.clone();
        async move { registry.dispatch(E::NAME, arguments).await }.boxed()
    })
}
