//! Tool invocation errors.
//!
//! These cover failures of the invocation itself. Inspection failures (a component
//! id that does not resolve, a blocked hook install) are reported inside a
//! [`ToolResult`](crate::ToolResult) instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Tool execution failed: {0}")]
    ExecutionFailed(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Parameter validation failed: {0}")]
    ValidationFailed(String),

    #[error("Tool execution timed out after {0} seconds")]
    Timeout(u64),

    #[error("Tool execution was cancelled")]
    Cancelled,

    #[error("Duplicate tool id: {0}")]
    Duplicate(String),
}

impl ToolError {
    /// Wrap a parameter decoding failure.
    pub fn invalid_params(err: impl std::fmt::Display) -> Self {
        ToolError::InvalidParameters(err.to_string())
    }
}
