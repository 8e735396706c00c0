//! Get node tool definition.

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

/// Parameters for fetching one node descriptor.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetNodeParams {
    #[schemars(description = "The name of the node (e.g. 'chatOpenAI')")]
    pub node_name: String,
}

/// Fetches the descriptor of a single node type.
pub struct GetNodeTool;

impl GetNodeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_node";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get details of a specific node by name";

    pub fn endpoint(node_name: &str) -> String {
        format!("/nodes/{}", urlencoding::encode(node_name))
    }

    #[instrument(skip_all, fields(node = %params.node_name))]
    pub async fn execute(params: &GetNodeParams, api: &dyn FlowiseApi) -> CallToolResult {
        info!("Getting node");
        let endpoint = Self::endpoint(&params.node_name);
        match api.request(Method::GET, &endpoint, None).await {
            Ok(node) => success_result(&node),
            Err(e) => error_result(&format!("Error getting node: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_metadata::<GetNodeParams>(Self::NAME, Self::DESCRIPTION)
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
                let params: GetNodeParams = parse_params(args)?;
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

    fn params(name: &str) -> GetNodeParams {
        GetNodeParams {
            node_name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_node_name_is_percent_encoded() {
        let api = RecordingApi::ok(json!({"name": "custom/node"}));
        let result = GetNodeTool::execute(&params("custom/node"), api.as_ref()).await;

        assert!(!is_error(&result));
        let request = api.only_request();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.endpoint, "/nodes/custom%2Fnode");
    }

    #[tokio::test]
    async fn test_plain_node_name_unchanged() {
        let api = RecordingApi::ok(json!({"name": "chatOpenAI"}));
        GetNodeTool::execute(&params("chatOpenAI"), api.as_ref()).await;
        assert_eq!(api.only_request().endpoint, "/nodes/chatOpenAI");
    }

    #[tokio::test]
    async fn test_get_node_failure() {
        let api = RecordingApi::failing(404, "Node missing not found");
        let result = GetNodeTool::execute(&params("missing"), api.as_ref()).await;

        assert!(is_error(&result));
        assert!(text_of(&result).starts_with("Error getting node: "));
        assert!(text_of(&result).contains("Node missing not found"));
    }
}
