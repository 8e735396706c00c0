//! Domains module containing the MCP-facing functionality.
//!
//! The server only exposes tools; each tool forwards to the Flowise API.

pub mod tools;
