//! Flowise REST API access.
//!
//! - `client.rs` - the request/response transport client ([`FlowiseApi`])
//! - `prediction.rs` - chatflow execution ([`PredictionApi`])
//! - `error.rs` - error type shared by both
//!
//! [`FlowiseServices`] bundles one instance of each so the tool router can
//! hand them to every dispatcher.

mod client;
mod error;
mod prediction;

use std::sync::Arc;

pub use client::{API_PREFIX, FlowiseApi, FlowiseClient};
pub use error::{FlowiseError, FlowiseResult};
pub use prediction::{
    FileUpload, HistoryMessage, HttpPredictionClient, MessageRole, PredictionApi,
    PredictionRequest,
};

use crate::core::config::FlowiseConfig;

/// The clients every tool dispatcher may call.
#[derive(Clone)]
pub struct FlowiseServices {
    /// Chatflow and node endpoints.
    pub api: Arc<dyn FlowiseApi>,

    /// Chatflow execution.
    pub predictions: Arc<dyn PredictionApi>,
}

impl FlowiseServices {
    /// Wire up the HTTP clients for the configured Flowise instance.
    pub fn from_config(config: &FlowiseConfig) -> FlowiseResult<Self> {
        let api: Arc<dyn FlowiseApi> = Arc::new(FlowiseClient::new(config)?);
        let predictions = Arc::new(HttpPredictionClient::new(api.clone()));
        Ok(Self { api, predictions })
    }

    /// Use explicit implementations, e.g. test doubles.
    pub fn new(api: Arc<dyn FlowiseApi>, predictions: Arc<dyn PredictionApi>) -> Self {
        Self { api, predictions }
    }
}
