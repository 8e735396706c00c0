//! Tools domain module.
//!
//! Every tool is a thin dispatcher: it takes validated parameters, makes at
//! most one call through the Flowise clients, and converts the outcome into
//! a `CallToolResult`. Failures never escape a tool; they come back as
//! error results.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Builds the rmcp ToolRouter from the definitions
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file under `definitions/`
//! 2. Define params, `execute()`, `to_tool()` and `create_route()`
//! 3. Export it from the parent `mod.rs`
//! 4. Add a route in `router.rs` using `with_route()`

pub mod definitions;
pub mod router;

pub use router::{build_tool_router, tool_names};
