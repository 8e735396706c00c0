//! Node catalog tools.
//!
//! Read-only discovery of the node types that can appear in a chatflow.

pub mod category;
pub mod get;
pub mod list;

pub use category::{GetNodesByCategoryParams, GetNodesByCategoryTool};
pub use get::{GetNodeParams, GetNodeTool};
pub use list::{ListNodesParams, ListNodesTool};
