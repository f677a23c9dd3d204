//! `react_install_hook`

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use reactscope_protocols::{SideEffect, Tool, ToolContext, ToolDefinition, ToolError, ToolResult};

use crate::inspector::Inspector;

use super::{failure, parse_params, to_json};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallHookParams {}

/// Install the React hook in the page (idempotent).
pub struct InstallHookTool {
    definition: ToolDefinition,
    inspector: Arc<Inspector>,
}

impl InstallHookTool {
    pub fn new(inspector: Arc<Inspector>) -> Self {
        let definition = ToolDefinition::new(
            "react_install_hook",
            "React Install Hook",
            "Install the React introspection hook in the page. Safe to call repeatedly; \
             reloads the page once if the first attempt is rejected.",
        )
        .with_parameters_schema(json!({"type": "object", "properties": {}}))
        .with_side_effect(SideEffect::Navigates);
        Self {
            definition,
            inspector,
        }
    }
}

#[async_trait]
impl Tool for InstallHookTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        _ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let _params: InstallHookParams = parse_params(params)?;

        let outcome = match self.inspector.ensure_installed().await {
            Ok(outcome) => outcome,
            Err(e) => return Ok(failure(e)),
        };
        let table = self.inspector.hook_table();

        let mut content = format!(
            "Hook installed: {} registration(s), {} root(s)",
            table.registrations.len(),
            table.root_count()
        );
        for registration in table.registrations.values() {
            content.push_str(&format!(
                "\n  [{}] {} {}",
                registration.id,
                registration.name,
                registration.version.as_deref().unwrap_or("")
            ));
        }
        if outcome.reloaded {
            content.push_str("\n(page was reloaded)");
        }

        Ok(ToolResult::success_json(
            content.trim_end().to_string(),
            json!({
                "table": to_json(&table)?,
                "added": outcome.added,
                "reloaded": outcome.reloaded,
            }),
        ))
    }
}
