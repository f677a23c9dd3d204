//! # reactscope protocols
//!
//! The tool-call boundary shared by the inspection engine and whatever transport
//! hosts it. Contains only interface definitions and payload types.
//!
//! - [`Tool`] - an invocable inspection operation with a JSON parameter schema
//! - [`ToolResult`] - success payload, or `{success: false, error}` on failure
//! - [`ToolRegistry`] - lookup of tools by id

pub mod error;
pub mod tool;
pub mod types;

pub use error::ToolError;
pub use tool::{Tool, ToolContext, ToolDefinition, ToolRegistry, ToolResult};
pub use types::*;
