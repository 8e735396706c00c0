//! Shared execution step for the prediction tools.

use rmcp::model::CallToolResult;
use tracing::info;

use super::super::common::{error_result, success_result};
use crate::flowise::{PredictionApi, PredictionRequest};

/// Submit one prediction and turn the outcome into a tool result.
pub async fn run_prediction(
    request: PredictionRequest,
    predictions: &dyn PredictionApi,
) -> CallToolResult {
    info!("Running prediction on chatflow {}", request.chatflow_id);
    match predictions.create_prediction(request).await {
        Ok(result) => success_result(&result),
        Err(e) => error_result(&format!("Error running chatflow: {}", e)),
    }
}
