//! Flowise MCP Server Library
//!
//! Exposes the Flowise REST API as Model Context Protocol (MCP) tools so an
//! LLM client can manage and run chatflows and browse the node catalog.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **flowise**: the HTTP client for the Flowise REST API and chatflow execution
//! - **domains**: tool definitions, one file per tool
//!
//! # Example
//!
//! ```rust,no_run
//! use flowise_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;
pub mod flowise;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
