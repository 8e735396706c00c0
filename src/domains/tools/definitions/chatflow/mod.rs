//! Chatflow management tools.
//!
//! CRUD over `/chatflows`:
//! - `list` - GET /chatflows
//! - `get` - GET /chatflows/{id}
//! - `create` - POST /chatflows
//! - `update` - PUT /chatflows/{id}
//! - `delete` - DELETE /chatflows/{id}

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod types;
pub mod update;

pub use create::{CreateChatflowParams, CreateChatflowTool};
pub use delete::{DeleteChatflowParams, DeleteChatflowTool};
pub use get::{GetChatflowParams, GetChatflowTool};
pub use list::{ListChatflowsParams, ListChatflowsTool};
pub use types::{ChatbotConfig, ChatflowType, FlowData};
pub use update::{UpdateChatflowParams, UpdateChatflowTool};
