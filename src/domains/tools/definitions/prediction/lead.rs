//! Create prediction with lead capture tool definition.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::super::common::{parse_params, tool_metadata};
use super::run::run_prediction;
use crate::flowise::{PredictionApi, PredictionRequest};

/// Parameters for a prediction that records a lead's email address.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePredictionWithLeadParams {
    #[schemars(description = "The ID of the chatflow to use")]
    pub chatflow_id: String,

    #[schemars(description = "The question or prompt to send to the chatflow")]
    pub question: String,

    #[schemars(email, description = "Email address for lead capture")]
    pub lead_email: String,

    #[serde(default)]
    #[schemars(description = "Optional chat ID to continue an existing conversation")]
    pub chat_id: Option<String>,

    #[serde(default)]
    #[schemars(description = "Optional configuration overrides for the chatflow")]
    pub override_config: Option<Map<String, Value>>,
}

/// Syntactic email check: one `@`, non-empty local part, dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Runs a chatflow and attaches a captured lead email.
pub struct CreatePredictionWithLeadTool;

impl CreatePredictionWithLeadTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_prediction_with_lead";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a prediction and capture lead information";

    pub async fn execute(
        params: &CreatePredictionWithLeadParams,
        predictions: &dyn PredictionApi,
    ) -> CallToolResult {
        let request = PredictionRequest::new(&params.chatflow_id, &params.question)
            .lead_email(&params.lead_email)
            .chat_id(params.chat_id.clone())
            .override_config(params.override_config.clone());
        run_prediction(request, predictions).await
    }

    /// Parse arguments, enforcing the email format the schema advertises.
    pub fn parse(args: JsonObject) -> Result<CreatePredictionWithLeadParams, McpError> {
        let params: CreatePredictionWithLeadParams = parse_params(args)?;
        if !is_valid_email(&params.lead_email) {
            return Err(McpError::invalid_params(
                format!("leadEmail is not a valid email address: {}", params.lead_email),
                None,
            ));
        }
        Ok(params)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        tool_metadata::<CreatePredictionWithLeadParams>(Self::NAME, Self::DESCRIPTION)
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
                let params = Self::parse(args)?;
                Ok(Self::execute(&params, predictions.as_ref()).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::test_support::{
        RecordingPredictions, is_error, text_of,
    };
    use serde_json::json;

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_email_check() {
        assert!(is_valid_email("lead@example.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co.uk"));
        assert!(!is_valid_email("lead@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("lead@@example.com"));
        assert!(!is_valid_email("lead@example..com"));
        assert!(!is_valid_email("lead example@example.com"));
        assert!(!is_valid_email("not-an-email"));
    }

    #[test]
    fn test_parse_rejects_bad_email() {
        let err = CreatePredictionWithLeadTool::parse(args(json!({
            "chatflowId": "abc",
            "question": "hi",
            "leadEmail": "nobody"
        })))
        .unwrap_err();
        assert!(err.message.contains("leadEmail"));
    }

    #[test]
    fn test_schema_marks_email_format() {
        let tool = CreatePredictionWithLeadTool::to_tool();
        let schema = serde_json::Value::Object((*tool.input_schema).clone());
        assert_eq!(schema["properties"]["leadEmail"]["format"], "email");
    }

    #[tokio::test]
    async fn test_lead_email_is_forwarded() {
        let predictions = RecordingPredictions::ok(json!({"text": "Thanks, we'll be in touch"}));
        let params = CreatePredictionWithLeadTool::parse(args(json!({
            "chatflowId": "sales",
            "question": "I'd like a demo",
            "leadEmail": "lead@example.com",
            "chatId": "chat-7"
        })))
        .unwrap();

        let result = CreatePredictionWithLeadTool::execute(&params, predictions.as_ref()).await;

        assert!(!is_error(&result));
        assert!(text_of(&result).contains("in touch"));
        let request = predictions.only_request();
        assert_eq!(request.lead_email.as_deref(), Some("lead@example.com"));
        assert_eq!(request.chat_id.as_deref(), Some("chat-7"));
        assert!(!request.streaming);
    }

    #[tokio::test]
    async fn test_lead_failure() {
        let predictions = RecordingPredictions::failing("chatflow not found");
        let params = CreatePredictionWithLeadTool::parse(args(json!({
            "chatflowId": "sales",
            "question": "hi",
            "leadEmail": "lead@example.com"
        })))
        .unwrap();

        let result = CreatePredictionWithLeadTool::execute(&params, predictions.as_ref()).await;

        assert!(is_error(&result));
        assert!(text_of(&result).starts_with("Error running chatflow: "));
        assert!(text_of(&result).contains("chatflow not found"));
    }
}
