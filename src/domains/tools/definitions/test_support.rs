//! Test doubles for the Flowise clients.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::Method;
use rmcp::model::{CallToolResult, RawContent};
use serde_json::Value;

use crate::flowise::{FlowiseApi, FlowiseError, FlowiseResult, PredictionApi, PredictionRequest};

/// One request seen by [`RecordingApi`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub endpoint: String,
    pub body: Option<Value>,
}

/// `FlowiseApi` that records every request and answers with a fixed reply.
pub struct RecordingApi {
    requests: Mutex<Vec<RecordedRequest>>,
    reply: Result<Value, (u16, String)>,
}

impl RecordingApi {
    pub fn ok(value: Value) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: Ok(value),
        })
    }

    pub fn failing(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: Err((status, body.to_string())),
        })
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl FlowiseApi for RecordingApi {
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> FlowiseResult<Value> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            endpoint: endpoint.to_string(),
            body,
        });
        match &self.reply {
            Ok(value) => Ok(value.clone()),
            Err((status, body)) => Err(FlowiseError::api(*status, body.clone())),
        }
    }
}

/// `PredictionApi` that records every request and answers with a fixed reply.
pub struct RecordingPredictions {
    requests: Mutex<Vec<PredictionRequest>>,
    reply: Result<Value, String>,
}

impl RecordingPredictions {
    pub fn ok(value: Value) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: Ok(value),
        })
    }

    /// Fails every call with a client error carrying `message`.
    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: Err(message.to_string()),
        })
    }

    pub fn only_request(&self) -> PredictionRequest {
        let requests = self.requests.lock().unwrap();
        assert_eq!(requests.len(), 1, "expected exactly one prediction");
        requests[0].clone()
    }
}

#[async_trait]
impl PredictionApi for RecordingPredictions {
    async fn create_prediction(&self, request: PredictionRequest) -> FlowiseResult<Value> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Ok(value) => Ok(value.clone()),
            Err(message) => Err(FlowiseError::client(message.clone())),
        }
    }
}

/// Text of the first content item.
pub fn text_of(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error.unwrap_or(false)
}
