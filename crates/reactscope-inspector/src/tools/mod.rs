//! Tool-call boundary: one tool per public inspector operation.

mod components;
mod hook;
mod map;
mod snapshot;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use reactscope_protocols::{Tool, ToolError, ToolRegistry, ToolResult};

use crate::error::InspectError;
use crate::inspector::Inspector;

pub use components::*;
pub use hook::*;
pub use map::*;
pub use snapshot::*;

/// Every inspector tool, in listing order.
pub fn inspector_tools(inspector: Arc<Inspector>) -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(InstallHookTool::new(inspector.clone())),
        Arc::new(SnapshotTool::new(inspector.clone())),
        Arc::new(ListComponentsTool::new(inspector.clone())),
        Arc::new(GetComponentTool::new(inspector.clone())),
        Arc::new(InspectElementTool::new(inspector.clone())),
        Arc::new(FindByTextTool::new(inspector.clone())),
        Arc::new(ComponentMapTool::new(inspector)),
    ]
}

/// Register every inspector tool.
pub fn register_tools(registry: &ToolRegistry, inspector: Arc<Inspector>) -> Result<(), ToolError> {
    for tool in inspector_tools(inspector) {
        registry.register(tool)?;
    }
    Ok(())
}

/// Decode tool parameters; a missing parameter object means all defaults.
pub(crate) fn parse_params<T: DeserializeOwned>(params: Value) -> Result<T, ToolError> {
    let params = if params.is_null() {
        Value::Object(Default::default())
    } else {
        params
    };
    serde_json::from_value(params).map_err(ToolError::invalid_params)
}

/// Inspection failures are results, not invocation errors.
pub(crate) fn failure(err: InspectError) -> ToolResult {
    tracing::debug!("Inspection failed: {}", err);
    ToolResult::error(err.to_string())
}

/// Serialize a structured payload; serialization of these types cannot fail
/// short of a bug, which is reported as an execution failure.
pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, ToolError> {
    serde_json::to_value(value).map_err(|e| ToolError::ExecutionFailed(e.to_string()))
}
