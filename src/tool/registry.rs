//! Tool registry for managing and resolving tools.

use crate::{
    error::{AgentError, Result},
    tool::Tool,
};
use std::{collections::HashMap, sync::Arc};
use tracing::{debug, info};

/// Registry of available tools.
///
/// Insertion order is preserved so that rendered prompts are deterministic.
/// Names are unique; resolution is exact and case-sensitive, with no fuzzy
/// matching, since the requested name originates from untrusted model output.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    /// Tools in registration order
    tools: Vec<Arc<dyn Tool>>,
    /// Name -> position in `tools`
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create a new empty tool registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool in the registry
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<()> {
        let name = tool.name().to_string();

        if self.index.contains_key(&name) {
            return Err(AgentError::configuration(format!(
                "Tool '{name}' is already registered"
            )));
        }

        info!("Registering tool: {}", name);
        self.index.insert(name, self.tools.len());
        self.tools.push(tool);

        Ok(())
    }

    /// Resolve a tool by exact name.
    ///
    /// Fails with [`AgentError::UnknownTool`] if no tool has that name.
    pub fn resolve(&self, name: &str) -> Result<&Arc<dyn Tool>> {
        self.index
            .get(name)
            .map(|&i| &self.tools[i])
            .ok_or_else(|| AgentError::unknown_tool(name))
    }

    /// Check if a tool with the given name exists
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Tools in registration order
    #[must_use]
    pub fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    /// Tool names in registration order
    #[must_use]
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name()).collect()
    }

    /// Number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry holds no tools
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Resolve a tool and execute it with the given input
    pub async fn execute(&self, tool_name: &str, input: &str) -> Result<String> {
        let tool = self.resolve(tool_name)?;

        debug!("Executing tool '{}' with input: {:?}", tool_name, input);
        tool.invoke(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::builtin::{EchoTool, TextLengthTool};

    #[tokio::test]
    async fn test_registry_basic_operations() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool::new())).unwrap();

        assert!(registry.contains("echo"));
        assert_eq!(registry.len(), 1);

        let tool = registry.resolve("echo").unwrap();
        assert_eq!(tool.name(), "echo");

        let observation = registry.execute("echo", "hello").await.unwrap();
        assert_eq!(observation, "hello");
    }

    #[test]
    fn test_resolve_unknown_tool_fails() {
        let registry = ToolRegistry::new();
        let err = registry.resolve("nonexistent_tool").unwrap_err();
        assert!(matches!(err, AgentError::UnknownTool { .. }));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool::new())).unwrap();
        let err = registry.register(Arc::new(EchoTool::new())).unwrap_err();
        assert!(matches!(err, AgentError::Configuration { .. }));
    }

    #[test]
    fn test_names_preserve_insertion_order() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(TextLengthTool::new())).unwrap();
        registry.register(Arc::new(EchoTool::new())).unwrap();

        assert_eq!(registry.tool_names(), vec!["text_length", "echo"]);
    }
}
