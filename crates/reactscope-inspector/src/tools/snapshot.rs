//! `a11y_snapshot` and `react_find_by_text`

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use reactscope_protocols::{Tool, ToolContext, ToolDefinition, ToolError, ToolResult};

use crate::fiber::DescribeOptions;
use crate::inspector::Inspector;

use super::components::descriptor_text;
use super::{failure, parse_params, to_json};

#[derive(Debug, Default, Deserialize)]
pub struct SnapshotParams {
    /// Keep nodes the platform marks as ignored.
    #[serde(default)]
    pub verbose: bool,
}

/// Accessibility tree of the page.
pub struct SnapshotTool {
    definition: ToolDefinition,
    inspector: Arc<Inspector>,
}

impl SnapshotTool {
    pub fn new(inspector: Arc<Inspector>) -> Self {
        let definition = ToolDefinition::new(
            "a11y_snapshot",
            "Accessibility Snapshot",
            "Accessibility tree of the page with a uid per node.",
        )
        .with_parameters_schema(json!({
            "type": "object",
            "properties": {
                "verbose": {
                    "type": "boolean",
                    "description": "Include nodes the browser marks as ignored",
                    "default": false
                }
            }
        }));
        Self {
            definition,
            inspector,
        }
    }
}

#[async_trait]
impl Tool for SnapshotTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: SnapshotParams = parse_params(params)?;

        match self.inspector.snapshot(params.verbose).await {
            Ok(Some(snapshot)) => Ok(ToolResult::success_json(
                snapshot.render(),
                to_json(&snapshot)?,
            )),
            Ok(None) => Ok(ToolResult::success_json(
                "Accessibility tree is empty",
                serde_json::Value::Null,
            )),
            Err(e) => Ok(failure(e)),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FindByTextParams {
    /// Substring of the accessible name.
    pub text: String,
    /// Exact accessibility role.
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub include_state: bool,
}

/// Which component renders the element with this text?
pub struct FindByTextTool {
    definition: ToolDefinition,
    inspector: Arc<Inspector>,
}

impl FindByTextTool {
    pub fn new(inspector: Arc<Inspector>) -> Self {
        let definition = ToolDefinition::new(
            "react_find_by_text",
            "React Find By Text",
            "Find the components rendering accessible elements whose name contains the text.",
        )
        .with_parameters_schema(json!({
            "type": "object",
            "properties": {
                "text": {"type": "string", "description": "Text contained in the accessible name"},
                "role": {"type": "string", "description": "Accessibility role, e.g. button"},
                "include_state": {"type": "boolean", "default": false}
            },
            "required": ["text"]
        }));
        Self {
            definition,
            inspector,
        }
    }
}

#[async_trait]
impl Tool for FindByTextTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: FindByTextParams = parse_params(params)?;
        let options = DescribeOptions {
            include_state: params.include_state,
            ..DescribeOptions::from_limits(self.inspector.limits())
        };

        let matches = match self
            .inspector
            .find_by_accessibility(params.role.as_deref(), &params.text, &options)
            .await
        {
            Ok(matches) => matches,
            Err(e) => return Ok(failure(e)),
        };

        let content = matches
            .iter()
            .map(|m| {
                let element = match &m.accessibility {
                    Some(a) => format!("{} {:?}", a.role, a.name.as_deref().unwrap_or("")),
                    None => m.host_type.clone(),
                };
                format!("{} <- {}", element, descriptor_text(&m.component))
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        Ok(ToolResult::success_json(content, to_json(&matches)?))
    }
}
