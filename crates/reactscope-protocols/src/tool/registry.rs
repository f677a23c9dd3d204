//! Tool registry for looking tools up by id.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{Tool, ToolContext, ToolDefinition, ToolResult};
use crate::error::ToolError;

/// Registry of available tools, kept in registration order.
pub struct ToolRegistry {
    tools: RwLock<Vec<Arc<dyn Tool>>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: RwLock::new(Vec::new()),
        }
    }

    /// Register a tool. Ids must be unique.
    pub fn register(&self, tool: Arc<dyn Tool>) -> Result<(), ToolError> {
        let mut tools = self.tools.write();
        let id = &tool.definition().id;
        if tools.iter().any(|t| &t.definition().id == id) {
            return Err(ToolError::Duplicate(id.clone()));
        }
        tools.push(tool);
        Ok(())
    }

    /// Get a tool by id.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Tool>> {
        self.tools
            .read()
            .iter()
            .find(|t| t.definition().id == id)
            .cloned()
    }

    /// List all tool definitions.
    pub fn list(&self) -> Vec<ToolDefinition> {
        self.tools
            .read()
            .iter()
            .map(|t| t.definition().clone())
            .collect()
    }

    /// Validate and run the tool registered under `id`.
    pub async fn invoke(
        &self,
        id: &str,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let tool = self
            .get(id)
            .ok_or_else(|| ToolError::NotFound(id.to_string()))?;
        tool.validate(&params)?;
        tool.execute(params, ctx).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct EchoTool {
        definition: ToolDefinition,
    }

    impl EchoTool {
        fn new(id: &str) -> Self {
            Self {
                definition: ToolDefinition::new(id, "Echo", "Echo params back"),
            }
        }
    }

    #[async_trait]
    impl Tool for EchoTool {
        fn definition(&self) -> &ToolDefinition {
            &self.definition
        }

        async fn execute(
            &self,
            params: serde_json::Value,
            _ctx: ToolContext,
        ) -> Result<ToolResult, ToolError> {
            Ok(ToolResult::success(params.to_string()))
        }
    }

    #[test]
    fn test_register_and_list_in_order() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool::new("b"))).unwrap();
        registry.register(Arc::new(EchoTool::new("a"))).unwrap();
        let ids: Vec<_> = registry.list().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_register_duplicate() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool::new("a"))).unwrap();
        let err = registry.register(Arc::new(EchoTool::new("a"))).unwrap_err();
        assert!(matches!(err, ToolError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_invoke_unknown_tool() {
        let registry = ToolRegistry::new();
        let err = registry
            .invoke("nope", serde_json::json!({}), ToolContext::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_invoke_runs_tool() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool::new("echo"))).unwrap();
        let result = registry
            .invoke("echo", serde_json::json!({"x": 1}), ToolContext::new())
            .await
            .unwrap();
        assert_eq!(result.content, r#"{"x":1}"#);
    }
}
