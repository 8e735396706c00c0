//! List nodes tool definition.

use std::sync::Arc;

use futures::FutureExt;
use reqwest::Method;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::super::common::{error_result, parse_params, success_result, tool_metadata};
use crate::flowise::FlowiseApi;

/// `list_nodes` takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListNodesParams {}

/// Lists every node type available for building chatflows.
pub struct ListNodesTool;

impl ListNodesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_nodes";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List all available nodes in Flowise";

    pub async fn execute(_params: &ListNodesParams, api: &dyn FlowiseApi) -> CallToolResult {
        info!("Listing nodes");
        match api.request(Method::GET, "/nodes", None).await {
            Ok(nodes) => success_result(&nodes),
            Err(e) => error_result(&format!("Error listing nodes: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_metadata::<ListNodesParams>(Self::NAME, Self::DESCRIPTION)
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(api: Arc<dyn FlowiseApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let api = api.clone();
            async move {
                let params: ListNodesParams = parse_params(args)?;
                Ok(Self::execute(&params, api.as_ref()).await)
            }
            .boxed()
        })
    }
}
