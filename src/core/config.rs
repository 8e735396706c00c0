//! Configuration management for the MCP server.
//!
//! Configuration is read once at startup from the environment (and an
//! optional `.env` file) and shared immutably afterwards.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default Flowise instance when `BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Flowise instance to talk to.
    pub flowise: FlowiseConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Connection settings for the Flowise REST API.
#[derive(Clone, Serialize, Deserialize)]
pub struct FlowiseConfig {
    /// Root URL of the Flowise instance, without the `/api/v1` prefix.
    pub base_url: String,

    /// Bearer credential. Empty means no `Authorization` header is sent.
    pub api_key: String,
}

impl FlowiseConfig {
    /// Whether a credential is configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for FlowiseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowiseConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.has_api_key().then_some("[REDACTED]"))
            .finish()
    }
}

impl Default for FlowiseConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "flowise-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            flowise: FlowiseConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Flowise settings come from `BASE_URL` and `API_KEY`; server settings
    /// use the `MCP_` prefix (`MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MCP_TRANSPORT`, ...).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        if let Ok(base_url) = std::env::var("BASE_URL") {
            config.flowise.base_url = base_url;
        }

        if let Ok(api_key) = std::env::var("API_KEY") {
            config.flowise.api_key = api_key;
        }

        config
    }

    /// Log the Flowise connection settings (credential redacted).
    ///
    /// Called after logging is initialised, since `from_env` runs before the
    /// subscriber exists.
    pub fn log_summary(&self) {
        info!("Flowise base URL: {}", self.flowise.base_url);
        if !self.flowise.has_api_key() {
            warn!("API_KEY not set - requests will be sent without an Authorization header");
        }
    }
}
