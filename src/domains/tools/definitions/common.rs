//! Helpers shared by every Flowise tool: response construction, parameter
//! parsing and tool metadata.

use rmcp::{
    ErrorData as McpError,
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, Content, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

/// Wrap a value as pretty-printed JSON text.
pub fn success_result(data: &Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
    CallToolResult::success(vec![Content::text(text)])
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Deserialize tool arguments, reporting malformed input as `invalid_params`.
pub fn parse_params<P: DeserializeOwned>(args: JsonObject) -> Result<P, McpError> {
    serde_json::from_value(Value::Object(args))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

/// Build the MCP metadata for a tool whose arguments deserialize into `P`.
pub fn tool_metadata<P: JsonSchema + 'static>(name: &'static str, description: &'static str) -> Tool {
    Tool {
        name: name.into(),
        description: Some(description.into()),
        input_schema: cached_schema_for_type::<P>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::test_support::text_of;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_success_is_pretty_json_without_error_flag() {
        let result = success_result(&json!([{"id": "1", "name": "Flow 1"}]));
        assert_ne!(result.is_error, Some(true));
        assert_eq!(
            text_of(&result),
            "[\n  {\n    \"id\": \"1\",\n    \"name\": \"Flow 1\"\n  }\n]"
        );
    }

    #[test]
    fn test_error_sets_flag_and_keeps_message() {
        let result = error_result("Error getting chatflow: boom");
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Error getting chatflow: boom");
    }

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Required {
        id: String,
    }

    #[test]
    fn test_parse_params_missing_field_is_invalid_params() {
        let args = json!({}).as_object().cloned().unwrap();
        let err = parse_params::<Required>(args).unwrap_err();
        assert!(err.message.contains("id"));
    }
}
