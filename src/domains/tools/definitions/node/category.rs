//! Nodes-by-category tool definition.

use std::sync::Arc;

use futures::FutureExt;
use reqwest::Method;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::common::{error_result, parse_params, success_result, tool_metadata};
use crate::flowise::FlowiseApi;

/// Parameters for listing the nodes of one category.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetNodesByCategoryParams {
    /// Category name, e.g. "Chat Models" or "Tools & Utilities".
    #[schemars(description = "The category name (e.g. 'Chat Models', 'Tools')")]
    pub category: String,
}

/// Lists the node types in a category.
pub struct GetNodesByCategoryTool;

impl GetNodesByCategoryTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_nodes_by_category";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get nodes filtered by category";

    /// Endpoint for a category; category names routinely contain spaces and `&`.
    pub fn endpoint(category: &str) -> String {
        format!("/nodes/category/{}", urlencoding::encode(category))
    }

    #[instrument(skip_all, fields(category = %params.category))]
    pub async fn execute(params: &GetNodesByCategoryParams, api: &dyn FlowiseApi) -> CallToolResult {
        info!("Getting nodes by category");
        let endpoint = Self::endpoint(&params.category);
        match api.request(Method::GET, &endpoint, None).await {
            Ok(nodes) => success_result(&nodes),
            Err(e) => error_result(&format!("Error getting nodes by category: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_metadata::<GetNodesByCategoryParams>(Self::NAME, Self::DESCRIPTION)
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
                let params: GetNodesByCategoryParams = parse_params(args)?;
                Ok(Self::execute(&params, api.as_ref()).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::test_support::{RecordingApi, is_error, text_of};
    use serde_json::json;

    fn params(category: &str) -> GetNodesByCategoryParams {
        GetNodesByCategoryParams {
            category: category.to_string(),
        }
    }

    #[tokio::test]
    async fn test_category_is_percent_encoded() {
        let api = RecordingApi::ok(json!([]));
        let result =
            GetNodesByCategoryTool::execute(&params("Tools & Utilities"), api.as_ref()).await;

        assert!(!is_error(&result));
        assert_eq!(
            api.only_request().endpoint,
            "/nodes/category/Tools%20%26%20Utilities"
        );
    }

    #[test]
    fn test_endpoint_encodes_slash() {
        assert_eq!(
            GetNodesByCategoryTool::endpoint("Agents/Beta"),
            "/nodes/category/Agents%2FBeta"
        );
        assert_eq!(
            GetNodesByCategoryTool::endpoint("Chat Models"),
            "/nodes/category/Chat%20Models"
        );
    }

    #[tokio::test]
    async fn test_category_failure() {
        let api = RecordingApi::failing(404, "No nodes");
        let result = GetNodesByCategoryTool::execute(&params("Nope"), api.as_ref()).await;

        assert!(is_error(&result));
        assert_eq!(
            text_of(&result),
            "Error getting nodes by category: Flowise API error (404): No nodes"
        );
    }
}
