//! Update chatflow tool definition.

use std::sync::Arc;

use futures::FutureExt;
use reqwest::Method;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::super::common::{error_result, parse_params, success_result, tool_metadata};
use super::types::{ChatbotConfig, FlowData, encode};
use crate::flowise::{FlowiseApi, FlowiseResult};

/// Parameters for updating a chatflow. Only supplied fields are changed.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChatflowParams {
    /// ID of the chatflow.
    #[schemars(description = "The ID of the chatflow to update")]
    pub chatflow_id: String,

    #[serde(default)]
    #[schemars(description = "New name for the chatflow")]
    pub name: Option<String>,

    #[serde(default)]
    #[schemars(description = "Updated flow data containing nodes and edges")]
    pub flow_data: Option<FlowData>,

    #[serde(default)]
    #[schemars(description = "Updated chatbot configuration")]
    pub chatbot_config: Option<ChatbotConfig>,
}

/// Request body for `PUT /chatflows/{id}`; absent fields are left out.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateChatflowBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    flow_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chatbot_config: Option<String>,
}

/// Partially updates an existing chatflow.
pub struct UpdateChatflowTool;

impl UpdateChatflowTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "update_chatflow";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Update an existing chatflow";

    #[instrument(skip_all, fields(chatflow_id = %params.chatflow_id))]
    pub async fn execute(params: &UpdateChatflowParams, api: &dyn FlowiseApi) -> CallToolResult {
        info!("Updating chatflow");
        match Self::update(params, api).await {
            Ok(chatflow) => success_result(&chatflow),
            Err(e) => error_result(&format!("Error updating chatflow: {}", e)),
        }
    }

    async fn update(
        params: &UpdateChatflowParams,
        api: &dyn FlowiseApi,
    ) -> FlowiseResult<serde_json::Value> {
        let body = serde_json::to_value(Self::body(params)?)?;
        let endpoint = format!("/chatflows/{}", params.chatflow_id);
        api.request(Method::PUT, &endpoint, Some(body)).await
    }

    // An empty-string name counts as supplied and is sent.
    fn body(params: &UpdateChatflowParams) -> serde_json::Result<UpdateChatflowBody<'_>> {
        Ok(UpdateChatflowBody {
            name: params.name.as_deref(),
            flow_data: params.flow_data.as_ref().map(encode).transpose()?,
            chatbot_config: params.chatbot_config.as_ref().map(encode).transpose()?,
        })
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_metadata::<UpdateChatflowParams>(Self::NAME, Self::DESCRIPTION)
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
                let params: UpdateChatflowParams = parse_params(args)?;
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

    fn params(args: serde_json::Value) -> UpdateChatflowParams {
        serde_json::from_value(args).unwrap()
    }

    #[tokio::test]
    async fn test_update_without_fields_sends_empty_body() {
        let api = RecordingApi::ok(json!({"id": "abc"}));
        UpdateChatflowTool::execute(&params(json!({"chatflowId": "abc"})), api.as_ref()).await;

        let request = api.only_request();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.endpoint, "/chatflows/abc");
        assert_eq!(request.body, Some(json!({})));
    }

    #[tokio::test]
    async fn test_update_name_only() {
        let api = RecordingApi::ok(json!({"id": "abc", "name": "Renamed"}));
        let result = UpdateChatflowTool::execute(
            &params(json!({"chatflowId": "abc", "name": "Renamed"})),
            api.as_ref(),
        )
        .await;

        assert!(!is_error(&result));
        assert_eq!(api.only_request().body, Some(json!({"name": "Renamed"})));
    }

    #[tokio::test]
    async fn test_update_encodes_structured_fields() {
        let api = RecordingApi::ok(json!({"id": "abc"}));
        UpdateChatflowTool::execute(
            &params(json!({
                "chatflowId": "abc",
                "flowData": {"nodes": [], "edges": [{"id": "e1"}]},
                "chatbotConfig": {"starterPrompts": []}
            })),
            api.as_ref(),
        )
        .await;

        assert_eq!(
            api.only_request().body,
            Some(json!({
                "flowData": "{\"nodes\":[],\"edges\":[{\"id\":\"e1\"}]}",
                "chatbotConfig": "{\"starterPrompts\":[]}"
            }))
        );
    }

    #[tokio::test]
    async fn test_update_sends_empty_name() {
        let api = RecordingApi::ok(json!({"id": "abc"}));
        UpdateChatflowTool::execute(&params(json!({"chatflowId": "abc", "name": ""})), api.as_ref())
            .await;

        assert_eq!(api.only_request().body, Some(json!({"name": ""})));
    }

    #[tokio::test]
    async fn test_update_null_fields_are_absent() {
        let api = RecordingApi::ok(json!({"id": "abc"}));
        UpdateChatflowTool::execute(
            &params(json!({"chatflowId": "abc", "flowData": null, "chatbotConfig": null})),
            api.as_ref(),
        )
        .await;

        assert_eq!(api.only_request().body, Some(json!({})));
    }

    #[tokio::test]
    async fn test_update_failure() {
        let api = RecordingApi::failing(404, "Chatflow abc not found");
        let result =
            UpdateChatflowTool::execute(&params(json!({"chatflowId": "abc"})), api.as_ref()).await;

        assert!(is_error(&result));
        assert!(text_of(&result).starts_with("Error updating chatflow: "));
        assert!(text_of(&result).contains("Chatflow abc not found"));
    }
}
