//! Chatflow shapes accepted by the write tools.
//!
//! Flowise stores `flowData` and `chatbotConfig` as JSON strings, so both
//! are encoded once here before they are put in a request body.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Kind of chatflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChatflowType {
    #[default]
    Chatflow,
    Agentflow,
    Multiagent,
    Assistant,
}

/// The node graph of a chatflow.
///
/// Nodes and edges are passed through untouched; any other top-level keys
/// (such as `viewport`) are kept as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FlowData {
    /// Nodes of the flow.
    #[schemars(description = "Array of nodes in the flow")]
    pub nodes: Vec<Value>,

    /// Edges connecting the nodes.
    #[schemars(description = "Array of edges connecting nodes")]
    pub edges: Vec<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Free-form chatbot configuration.
pub type ChatbotConfig = Map<String, Value>;

/// Encode a structured field the way Flowise stores it.
pub fn encode<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chatflow_type_wire_names() {
        assert_eq!(serde_json::to_value(ChatflowType::default()).unwrap(), "CHATFLOW");
        assert_eq!(serde_json::to_value(ChatflowType::Multiagent).unwrap(), "MULTIAGENT");
        let parsed: ChatflowType = serde_json::from_value(json!("AGENTFLOW")).unwrap();
        assert_eq!(parsed, ChatflowType::Agentflow);
        assert!(serde_json::from_value::<ChatflowType>(json!("chatflow")).is_err());
    }

    #[test]
    fn test_flow_data_requires_nodes_and_edges() {
        assert!(serde_json::from_value::<FlowData>(json!({"nodes": []})).is_err());
        assert!(serde_json::from_value::<FlowData>(json!({"nodes": {}, "edges": []})).is_err());
    }

    #[test]
    fn test_flow_data_keeps_extra_keys() {
        let flow: FlowData = serde_json::from_value(json!({
            "nodes": [{"id": "n1"}],
            "edges": [],
            "viewport": {"x": 0, "y": 0, "zoom": 1}
        }))
        .unwrap();

        let encoded = encode(&flow).unwrap();
        assert_eq!(
            encoded,
            r#"{"nodes":[{"id":"n1"}],"edges":[],"viewport":{"x":0,"y":0,"zoom":1}}"#
        );
    }
}
