//! `react_list_components`, `react_get_component` and `react_inspect_element`

use std::fmt::Write as _;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use reactscope_protocols::{Tool, ToolContext, ToolDefinition, ToolError, ToolResult};

use crate::correlate::compact_value;
use crate::fiber::{ComponentDescriptor, DescribeOptions, Listing, WalkOptions};
use crate::inspector::Inspector;

use super::{failure, parse_params, to_json};

/// Multi-line text form of a descriptor.
pub fn descriptor_text(component: &ComponentDescriptor) -> String {
    let mut out = format!("{} ({}) id={}", component.name, component.kind, component.id);
    if let Some(key) = &component.key {
        let _ = write!(out, "\n  key: {}", key);
    }
    if let Some(source) = &component.source {
        let _ = write!(out, "\n  source: {}", source);
    }
    if let Some(props) = &component.props {
        let _ = write!(out, "\n  props: {}", props);
    }
    if let Some(state) = &component.state {
        let _ = write!(out, "\n  state: {}", state);
    }
    if let Some(owners) = component.owners.as_ref().filter(|o| !o.is_empty()) {
        out.push_str("\n  owners:");
        for owner in owners {
            let _ = write!(out, "\n    {} ({})", owner.name, owner.kind);
            if let Some(source) = &owner.source {
                let _ = write!(out, " @ {}", source);
            }
        }
    }
    out
}

fn listing_text(listing: &Listing) -> String {
    let mut out = String::new();
    for entry in &listing.components {
        let _ = write!(
            out,
            "{}{} [{}]",
            "  ".repeat(entry.depth),
            entry.name,
            entry.id
        );
        if let Some(key) = &entry.key {
            let _ = write!(out, " key={}", compact_value(&json!(key)));
        }
        out.push('\n');
    }
    if listing.components.is_empty() {
        out.push_str("No components found\n");
    }
    if listing.truncated {
        out.push_str("(more components not shown; raise max_nodes)\n");
    }
    out.trim_end().to_string()
}

fn describe_options(
    inspector: &Inspector,
    depth: Option<usize>,
    include_state: bool,
    include_owners: bool,
) -> DescribeOptions {
    let mut options = DescribeOptions::from_limits(inspector.limits());
    options.include_state = include_state;
    options.include_owners = include_owners;
    if let Some(depth) = depth {
        options.limits.max_depth = depth;
    }
    options
}

fn default_true() -> bool {
    true
}

// ============================================================================
// List Components
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ListComponentsParams {
    #[serde(default)]
    pub max_depth: Option<usize>,
    #[serde(default)]
    pub max_nodes: Option<usize>,
    #[serde(default)]
    pub include_all_types: bool,
    #[serde(default)]
    pub name_filter: Option<String>,
}

pub struct ListComponentsTool {
    definition: ToolDefinition,
    inspector: Arc<Inspector>,
}

impl ListComponentsTool {
    pub fn new(inspector: Arc<Inspector>) -> Self {
        let definition = ToolDefinition::new(
            "react_list_components",
            "React List Components",
            "List the React components of every mounted root with stable ids.",
        )
        .with_parameters_schema(json!({
            "type": "object",
            "properties": {
                "max_depth": {"type": "integer", "minimum": 0, "description": "Deepest component level listed"},
                "max_nodes": {"type": "integer", "minimum": 1, "description": "Most components listed"},
                "include_all_types": {"type": "boolean", "default": false, "description": "Also list host and internal nodes"},
                "name_filter": {"type": "string", "description": "Case-insensitive substring of the component name"}
            }
        }));
        Self {
            definition,
            inspector,
        }
    }
}

#[async_trait]
impl Tool for ListComponentsTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: ListComponentsParams = parse_params(params)?;
        let defaults = WalkOptions::from_limits(self.inspector.limits());
        let options = WalkOptions {
            max_depth: params.max_depth.unwrap_or(defaults.max_depth),
            max_nodes: params.max_nodes.unwrap_or(defaults.max_nodes),
            include_all_types: params.include_all_types,
            name_filter: params.name_filter.filter(|f| !f.is_empty()),
        };
        if options.max_nodes == 0 {
            return Err(ToolError::InvalidParameters(
                "max_nodes must be at least 1".to_string(),
            ));
        }

        match self.inspector.list_components(&options).await {
            Ok(listing) => Ok(ToolResult::success_json(
                listing_text(&listing),
                to_json(&listing)?,
            )),
            Err(e) => Ok(failure(e)),
        }
    }
}

// ============================================================================
// Get Component
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GetComponentParams {
    /// `<registration>:<root>:<path>` as returned by the listing.
    pub id: String,
    #[serde(default = "default_true")]
    pub include_state: bool,
    #[serde(default = "default_true")]
    pub include_owners: bool,
    /// Serialization depth for props and state.
    #[serde(default)]
    pub depth: Option<usize>,
}

pub struct GetComponentTool {
    definition: ToolDefinition,
    inspector: Arc<Inspector>,
}

impl GetComponentTool {
    pub fn new(inspector: Arc<Inspector>) -> Self {
        let definition = ToolDefinition::new(
            "react_get_component",
            "React Get Component",
            "Props, state, source location and owner chain of one component by id.",
        )
        .with_parameters_schema(json!({
            "type": "object",
            "properties": {
                "id": {"type": "string", "description": "Component id from react_list_components"},
                "include_state": {"type": "boolean", "default": true},
                "include_owners": {"type": "boolean", "default": true},
                "depth": {"type": "integer", "minimum": 0, "description": "Serialization depth for props and state"}
            },
            "required": ["id"]
        }));
        Self {
            definition,
            inspector,
        }
    }
}

#[async_trait]
impl Tool for GetComponentTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: GetComponentParams = parse_params(params)?;
        let options = describe_options(
            &self.inspector,
            params.depth,
            params.include_state,
            params.include_owners,
        );

        match self.inspector.get_component(&params.id, &options).await {
            Ok(component) => Ok(ToolResult::success_json(
                descriptor_text(&component),
                to_json(&component)?,
            )),
            Err(e) => Ok(failure(e)),
        }
    }
}

// ============================================================================
// Inspect Element
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct InspectElementParams {
    /// Backend DOM node id, as carried by accessibility snapshots.
    pub backend_node_id: i64,
    #[serde(default = "default_true")]
    pub include_state: bool,
    #[serde(default)]
    pub depth: Option<usize>,
}

pub struct InspectElementTool {
    definition: ToolDefinition,
    inspector: Arc<Inspector>,
}

impl InspectElementTool {
    pub fn new(inspector: Arc<Inspector>) -> Self {
        let definition = ToolDefinition::new(
            "react_inspect_element",
            "React Inspect Element",
            "The nearest React component rendering a DOM element, by backend node id.",
        )
        .with_parameters_schema(json!({
            "type": "object",
            "properties": {
                "backend_node_id": {"type": "integer", "description": "Backend DOM node id"},
                "include_state": {"type": "boolean", "default": true},
                "depth": {"type": "integer", "minimum": 0}
            },
            "required": ["backend_node_id"]
        }));
        Self {
            definition,
            inspector,
        }
    }
}

#[async_trait]
impl Tool for InspectElementTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let params: InspectElementParams = parse_params(params)?;
        let options = describe_options(&self.inspector, params.depth, params.include_state, true);

        match self
            .inspector
            .inspect_element(params.backend_node_id, &options)
            .await
        {
            Ok(found) => Ok(ToolResult::success_json(
                format!("<{}> <- {}", found.host_type, descriptor_text(&found.component)),
                to_json(&found)?,
            )),
            Err(e) => Ok(failure(e)),
        }
    }
}
