//! Tool definition types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::{Metadata, SideEffect};

/// Definition of a tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique identifier for the tool, used by callers to invoke it.
    pub id: String,

    /// Human-readable name.
    pub name: String,

    /// Description of what the tool does.
    pub description: String,

    /// JSON Schema for the parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters_schema: Option<serde_json::Value>,

    #[serde(default)]
    pub side_effect: SideEffect,

    /// Additional metadata.
    #[serde(default)]
    pub metadata: Metadata,
}

impl ToolDefinition {
    /// Create a new tool definition.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            parameters_schema: None,
            side_effect: SideEffect::ReadOnly,
            metadata: HashMap::new(),
        }
    }

    /// Set the parameters schema.
    pub fn with_parameters_schema(mut self, schema: serde_json::Value) -> Self {
        self.parameters_schema = Some(schema);
        self
    }

    /// Set the side-effect class.
    pub fn with_side_effect(mut self, side_effect: SideEffect) -> Self {
        self.side_effect = side_effect;
        self
    }

    /// Render as a JSON-RPC style tool listing entry.
    pub fn to_listing(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.id,
            "description": self.description,
            "inputSchema": self.parameters_schema.clone().unwrap_or_else(empty_object_schema)
        })
    }
}

fn empty_object_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": {},
        "required": []
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_defaults() {
        let def = ToolDefinition::new("a11y_snapshot", "A11y Snapshot", "Snapshot");
        assert_eq!(def.side_effect, SideEffect::ReadOnly);
        assert!(def.parameters_schema.is_none());
    }

    #[test]
    fn test_listing_without_schema() {
        let def = ToolDefinition::new("react_install_hook", "Install Hook", "Install");
        let listing = def.to_listing();
        assert_eq!(listing["name"], "react_install_hook");
        assert_eq!(listing["inputSchema"]["type"], "object");
    }

    #[test]
    fn test_listing_with_schema() {
        let def = ToolDefinition::new("x", "X", "x").with_parameters_schema(serde_json::json!({
            "type": "object",
            "properties": {"verbose": {"type": "boolean"}}
        }));
        let listing = def.to_listing();
        assert_eq!(listing["inputSchema"]["properties"]["verbose"]["type"], "boolean");
    }
}
