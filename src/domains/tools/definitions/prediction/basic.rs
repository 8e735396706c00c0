//! Create prediction tool definition.
//!
//! Runs a chatflow against a single question.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::super::common::{parse_params, tool_metadata};
use super::run::run_prediction;
use crate::flowise::{PredictionApi, PredictionRequest};

/// Parameters for a plain prediction.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePredictionParams {
    #[schemars(description = "The ID of the chatflow to use")]
    pub chatflow_id: String,

    #[schemars(description = "The question or prompt to send to the chatflow")]
    pub question: String,

    #[serde(default)]
    #[schemars(description = "Optional chat ID to continue an existing conversation")]
    pub chat_id: Option<String>,

    #[serde(default)]
    #[schemars(description = "Optional configuration overrides for the chatflow")]
    pub override_config: Option<Map<String, Value>>,
}

/// Runs a chatflow with a question.
pub struct CreatePredictionTool;

impl CreatePredictionTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_prediction";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Create a prediction using a Flowise chatflow. Send a question to a chatflow and get a response.";

    pub async fn execute(
        params: &CreatePredictionParams,
        predictions: &dyn PredictionApi,
    ) -> CallToolResult {
        let request = PredictionRequest::new(&params.chatflow_id, &params.question)
            .chat_id(params.chat_id.clone())
            .override_config(params.override_config.clone());
        run_prediction(request, predictions).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_metadata::<CreatePredictionParams>(Self::NAME, Self::DESCRIPTION)
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(predictions: Arc<dyn PredictionApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let predictions = predictions.clone();
            async move {
                let params: CreatePredictionParams = parse_params(args)?;
                Ok(Self::execute(&params, predictions.as_ref()).await)
            }
            .boxed()
        })
    }
}
