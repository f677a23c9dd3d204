//! `react_component_map`

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use reactscope_protocols::{Tool, ToolContext, ToolDefinition, ToolError, ToolResult};

use crate::correlate::MapOptions;
use crate::inspector::Inspector;

use super::{failure, parse_params, to_json};

#[derive(Debug, Default, Deserialize)]
pub struct ComponentMapParams {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub include_state: bool,
}

/// Components and the accessible elements they render, as one tree.
pub struct ComponentMapTool {
    definition: ToolDefinition,
    inspector: Arc<Inspector>,
}

impl ComponentMapTool {
    pub fn new(inspector: Arc<Inspector>) -> Self {
        let definition = ToolDefinition::new(
            "react_component_map",
            "React Component Map",
            "Tree of React components merged with the accessibility nodes they render.",
        )
        .with_parameters_schema(json!({
            "type": "object",
            "properties": {
                "verbose": {"type": "boolean", "default": false, "description": "Keep elements with no accessibility node as <tag>"},
                "include_state": {"type": "boolean", "default": false}
            }
        }));
        Self {
            definition,
            inspector,
        }
    }
}

#[async_trait]
impl Tool for ComponentMapTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: ComponentMapParams = parse_params(params)?;
        let options = MapOptions {
            verbose: params.verbose,
            include_state: params.include_state,
        };

        match self.inspector.build_map(&options).await {
            Ok(map) => {
                let text = map.render();
                let content = if text.is_empty() {
                    "No components found".to_string()
                } else {
                    text.trim_end().to_string()
                };
                Ok(ToolResult::success_json(content, to_json(&map)?))
            }
            Err(e) => Ok(failure(e)),
        }
    }
}
