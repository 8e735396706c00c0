//! Create chatflow tool definition.

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
use super::types::{ChatbotConfig, ChatflowType, FlowData, encode};
use crate::flowise::{FlowiseApi, FlowiseResult};

/// Parameters for creating a chatflow.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateChatflowParams {
    /// Display name.
    #[schemars(description = "Name of the chatflow")]
    pub name: String,

    /// Node graph.
    #[schemars(description = "Flow data containing nodes and edges")]
    pub flow_data: FlowData,

    /// Chatflow kind, CHATFLOW when omitted.
    #[serde(default, rename = "type")]
    #[schemars(description = "Type of chatflow (default: CHATFLOW)")]
    pub kind: ChatflowType,

    /// Chatbot UI configuration.
    #[serde(default)]
    #[schemars(description = "Chatbot configuration")]
    pub chatbot_config: Option<ChatbotConfig>,
}

/// Request body for `POST /chatflows`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateChatflowBody<'a> {
    name: &'a str,
    flow_data: String,
    #[serde(rename = "type")]
    kind: ChatflowType,
    #[serde(skip_serializing_if = "Option::is_none")]
    chatbot_config: Option<String>,
}

/// Creates a new chatflow from a node graph.
pub struct CreateChatflowTool;

impl CreateChatflowTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_chatflow";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a new chatflow in Flowise";

    #[instrument(skip_all, fields(name = %params.name))]
    pub async fn execute(params: &CreateChatflowParams, api: &dyn FlowiseApi) -> CallToolResult {
        info!("Creating chatflow");
        match Self::create(params, api).await {
            Ok(chatflow) => success_result(&chatflow),
            Err(e) => error_result(&format!("Error creating chatflow: {}", e)),
        }
    }

    async fn create(
        params: &CreateChatflowParams,
        api: &dyn FlowiseApi,
    ) -> FlowiseResult<serde_json::Value> {
        let body = serde_json::to_value(Self::body(params)?)?;
        api.request(Method::POST, "/chatflows", Some(body)).await
    }

    fn body(params: &CreateChatflowParams) -> serde_json::Result<CreateChatflowBody<'_>> {
        Ok(CreateChatflowBody {
            name: &params.name,
            flow_data: encode(&params.flow_data)?,
            kind: params.kind,
            chatbot_config: params.chatbot_config.as_ref().map(encode).transpose()?,
        })
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_metadata::<CreateChatflowParams>(Self::NAME, Self::DESCRIPTION)
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
                let params: CreateChatflowParams = parse_params(args)?;
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

    fn params(args: serde_json::Value) -> CreateChatflowParams {
        serde_json::from_value(args).unwrap()
    }

    #[tokio::test]
    async fn test_create_encodes_flow_data_and_defaults_type() {
        let api = RecordingApi::ok(json!({"id": "new-id", "name": "Bot"}));
        let params = params(json!({
            "name": "Bot",
            "flowData": {"nodes": [{"id": "chatOpenAI_0"}], "edges": []}
        }));

        let result = CreateChatflowTool::execute(&params, api.as_ref()).await;

        assert!(!is_error(&result));
        assert!(text_of(&result).contains("new-id"));
        let request = api.only_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.endpoint, "/chatflows");
        assert_eq!(
            request.body,
            Some(json!({
                "name": "Bot",
                "flowData": "{\"nodes\":[{\"id\":\"chatOpenAI_0\"}],\"edges\":[]}",
                "type": "CHATFLOW"
            }))
        );
    }

    #[tokio::test]
    async fn test_create_with_type_and_chatbot_config() {
        let api = RecordingApi::ok(json!({"id": "new-id"}));
        let params = params(json!({
            "name": "Agents",
            "flowData": {"nodes": [], "edges": []},
            "type": "MULTIAGENT",
            "chatbotConfig": {"welcomeMessage": "Hi"}
        }));

        CreateChatflowTool::execute(&params, api.as_ref()).await;

        let body = api.only_request().body.unwrap();
        assert_eq!(body["type"], "MULTIAGENT");
        assert_eq!(body["chatbotConfig"], "{\"welcomeMessage\":\"Hi\"}");
    }

    #[test]
    fn test_rejects_unknown_type() {
        let parsed = serde_json::from_value::<CreateChatflowParams>(json!({
            "name": "Bot",
            "flowData": {"nodes": [], "edges": []},
            "type": "WORKFLOW"
        }));
        assert!(parsed.is_err());
    }

    #[tokio::test]
    async fn test_create_failure() {
        let api = RecordingApi::failing(500, "Invalid flow");
        let params = params(json!({"name": "Bot", "flowData": {"nodes": [], "edges": []}}));

        let result = CreateChatflowTool::execute(&params, api.as_ref()).await;

        assert!(is_error(&result));
        assert_eq!(
            text_of(&result),
            "Error creating chatflow: Flowise API error (500): Invalid flow"
        );
    }
}
