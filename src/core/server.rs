//! MCP Server implementation.
//!
//! The server only exposes tools. Tools are defined in
//! `domains/tools/definitions/` with one file per tool and collected into a
//! `ToolRouter` by `domains/tools/router.rs`, so adding a tool does not
//! touch this file.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::error::Error;
use crate::domains::tools::build_tool_router;
use crate::flowise::FlowiseServices;

const INSTRUCTIONS: &str = "Tools for a Flowise instance: list, inspect, create, update, \
     delete and run chatflows, and browse the catalog of node types usable inside them.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a server talking to the Flowise instance named in `config`.
    pub fn new(config: Config) -> super::error::Result<Self> {
        if config.flowise.base_url.trim().is_empty() {
            return Err(Error::config("BASE_URL must not be empty"));
        }
        let services = FlowiseServices::from_config(&config.flowise)?;
        Ok(Self::with_services(config, services))
    }

    /// Create a server around already-built Flowise clients.
    pub fn with_services(config: Config, services: FlowiseServices) -> Self {
        info!("Registering Flowise tools");
        Self {
            config: Arc::new(config),
            tool_router: build_tool_router::<Self>(services),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Metadata of every registered tool.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}
