//! Get chatflow tool definition.

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

/// Parameters for fetching one chatflow.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetChatflowParams {
    /// ID of the chatflow.
    #[schemars(description = "The ID of the chatflow to retrieve")]
    pub chatflow_id: String,
}

/// Fetches a single chatflow, including its flow data.
pub struct GetChatflowTool;

impl GetChatflowTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_chatflow";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get details of a specific chatflow by ID";

    #[instrument(skip_all, fields(chatflow_id = %params.chatflow_id))]
    pub async fn execute(params: &GetChatflowParams, api: &dyn FlowiseApi) -> CallToolResult {
        info!("Getting chatflow");
        let endpoint = format!("/chatflows/{}", params.chatflow_id);
        match api.request(Method::GET, &endpoint, None).await {
            Ok(chatflow) => success_result(&chatflow),
            Err(e) => error_result(&format!("Error getting chatflow: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_metadata::<GetChatflowParams>(Self::NAME, Self::DESCRIPTION)
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
                let params: GetChatflowParams = parse_params(args)?;
                Ok(Self::execute(&params, api.as_ref()).await)
            }
            .boxed()
        })
    }
}
