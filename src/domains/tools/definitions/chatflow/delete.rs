//! Delete chatflow tool definition.

use std::sync::Arc;

use futures::FutureExt;
use reqwest::Method;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use super::super::common::{error_result, parse_params, success_result, tool_metadata};
use crate::flowise::FlowiseApi;

/// Parameters for deleting a chatflow.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteChatflowParams {
    #[schemars(description = "The ID of the chatflow to delete")]
    pub chatflow_id: String,
}

/// Deletes a chatflow.
///
/// The result echoes the deleted ID next to the raw API answer, since
/// Flowise only reports an affected-row count.
pub struct DeleteChatflowTool;

impl DeleteChatflowTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "delete_chatflow";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Delete a chatflow";

    #[instrument(skip_all, fields(chatflow_id = %params.chatflow_id))]
    pub async fn execute(params: &DeleteChatflowParams, api: &dyn FlowiseApi) -> CallToolResult {
        info!("Deleting chatflow");
        let endpoint = format!("/chatflows/{}", params.chatflow_id);
        match api.request(Method::DELETE, &endpoint, None).await {
            Ok(result) => success_result(&json!({
                "success": true,
                "deleted": params.chatflow_id,
                "result": result,
            })),
            Err(e) => error_result(&format!("Error deleting chatflow: {}", e)),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_metadata::<DeleteChatflowParams>(Self::NAME, Self::DESCRIPTION)
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
                let params: DeleteChatflowParams = parse_params(args)?;
                Ok(Self::execute(&params, api.as_ref()).await)
            }
            .boxed()
        })
    }
}
