//! Chatflow execution ("prediction") client.
//!
//! Predictions run a chatflow against a question. They go through their own
//! trait so the execution tools can be tested without an HTTP server.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use super::client::FlowiseApi;
use super::error::FlowiseResult;

/// Who produced a message in a conversation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum MessageRole {
    #[serde(rename = "apiMessage")]
    Api,
    #[serde(rename = "userMessage")]
    User,
}

/// One prior message supplied as conversation context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HistoryMessage {
    /// Message text.
    pub message: String,

    /// Message author.
    #[serde(rename = "type")]
    pub role: MessageRole,
}

/// A file attached to a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FileUpload {
    /// Base64 data URL or raw content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "File content (base64 data URL)")]
    pub data: Option<String>,

    /// Upload kind, e.g. "file" or "url".
    #[serde(rename = "type")]
    pub kind: String,

    /// File name.
    pub name: String,

    /// MIME type.
    pub mime: String,
}

/// A single chatflow execution request.
///
/// `chatflow_id` selects the flow and is not part of the request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    #[serde(skip)]
    pub chatflow_id: String,

    pub question: String,

    pub streaming: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_config: Option<Map<String, Value>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<HistoryMessage>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploads: Option<Vec<FileUpload>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_email: Option<String>,
}

impl PredictionRequest {
    /// Start a non-streaming request for `question` against `chatflow_id`.
    ///
    /// Tool results are a single payload, so there is no way to ask for a
    /// streamed response here.
    pub fn new(chatflow_id: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            chatflow_id: chatflow_id.into(),
            question: question.into(),
            streaming: false,
            chat_id: None,
            override_config: None,
            history: None,
            uploads: None,
            lead_email: None,
        }
    }

    pub fn chat_id(mut self, chat_id: Option<String>) -> Self {
        self.chat_id = chat_id;
        self
    }

    pub fn override_config(mut self, config: Option<Map<String, Value>>) -> Self {
        self.override_config = config;
        self
    }

    pub fn history(mut self, history: Vec<HistoryMessage>) -> Self {
        self.history = Some(history);
        self
    }

    pub fn uploads(mut self, uploads: Vec<FileUpload>) -> Self {
        self.uploads = Some(uploads);
        self
    }

    pub fn lead_email(mut self, email: impl Into<String>) -> Self {
        self.lead_email = Some(email.into());
        self
    }
}

/// Chatflow execution.
#[async_trait]
pub trait PredictionApi: Send + Sync {
    /// Run the chatflow and return whatever the platform answers.
    async fn create_prediction(&self, request: PredictionRequest) -> FlowiseResult<Value>;
}

/// Executes predictions through the REST endpoint `POST /prediction/{id}`.
#[derive(Clone)]
pub struct HttpPredictionClient {
    api: Arc<dyn FlowiseApi>,
}

impl HttpPredictionClient {
    pub fn new(api: Arc<dyn FlowiseApi>) -> Self {
        Self { api }
    }

    /// Endpoint for running a chatflow.
    pub fn endpoint(chatflow_id: &str) -> String {
        format!("/prediction/{}", urlencoding::encode(chatflow_id))
    }
}

#[async_trait]
impl PredictionApi for HttpPredictionClient {
    async fn create_prediction(&self, request: PredictionRequest) -> FlowiseResult<Value> {
        info!("Running chatflow {}", request.chatflow_id);
        let endpoint = Self::endpoint(&request.chatflow_id);
        let body = serde_json::to_value(&request)?;
        self.api.request(Method::POST, &endpoint, Some(body)).await
    }
}
