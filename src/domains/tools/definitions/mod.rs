//! Tool definitions module.
//!
//! Each tool is defined in its own file and exposes `NAME`, `DESCRIPTION`,
//! a parameters struct, `execute()`, `to_tool()` and `create_route()`.

pub mod chatflow;
pub mod common;
pub mod node;
pub mod prediction;

#[cfg(test)]
pub(crate) mod test_support;

pub use chatflow::{
    CreateChatflowTool, DeleteChatflowTool, GetChatflowTool, ListChatflowsTool, UpdateChatflowTool,
};
pub use node::{GetNodeTool, GetNodesByCategoryTool, ListNodesTool};
pub use prediction::{
    CreatePredictionTool, CreatePredictionWithFilesTool, CreatePredictionWithHistoryTool,
    CreatePredictionWithLeadTool,
};
