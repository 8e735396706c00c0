//! Tool Router - the static table of every Flowise tool.
//!
//! Each tool builds its own route; this module only decides which client
//! each one receives.

use rmcp::handler::server::tool::ToolRouter;

use crate::flowise::FlowiseServices;

use super::definitions::{
    CreateChatflowTool, CreatePredictionTool, CreatePredictionWithFilesTool,
    CreatePredictionWithHistoryTool, CreatePredictionWithLeadTool, DeleteChatflowTool,
    GetChatflowTool, GetNodeTool, GetNodesByCategoryTool, ListChatflowsTool, ListNodesTool,
    UpdateChatflowTool,
};

/// Names of all registered tools, in registration order.
pub fn tool_names() -> [&'static str; 12] {
    [
        CreatePredictionTool::NAME,
        CreatePredictionWithHistoryTool::NAME,
        CreatePredictionWithFilesTool::NAME,
        CreatePredictionWithLeadTool::NAME,
        ListChatflowsTool::NAME,
        GetChatflowTool::NAME,
        CreateChatflowTool::NAME,
        UpdateChatflowTool::NAME,
        DeleteChatflowTool::NAME,
        ListNodesTool::NAME,
        GetNodesByCategoryTool::NAME,
        GetNodeTool::NAME,
    ]
}

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(services: FlowiseServices) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    let FlowiseServices { api, predictions } = services;

    ToolRouter::new()
        .with_route(CreatePredictionTool::create_route(predictions.clone()))
        .with_route(CreatePredictionWithHistoryTool::create_route(predictions.clone()))
        .with_route(CreatePredictionWithFilesTool::create_route(predictions.clone()))
        .with_route(CreatePredictionWithLeadTool::create_route(predictions))
        .with_route(ListChatflowsTool::create_route(api.clone()))
        .with_route(GetChatflowTool::create_route(api.clone()))
        .with_route(CreateChatflowTool::create_route(api.clone()))
        .with_route(UpdateChatflowTool::create_route(api.clone()))
        .with_route(DeleteChatflowTool::create_route(api.clone()))
        .with_route(ListNodesTool::create_route(api.clone()))
        .with_route(GetNodesByCategoryTool::create_route(api.clone()))
        .with_route(GetNodeTool::create_route(api))
}
