//! Echo tool implementation - simple tool for testing and debugging.

use crate::{error::Result, tool::Tool};
use async_trait::async_trait;

/// Echo tool for testing and debugging
#[derive(Debug, Clone, Default)]
pub struct EchoTool;

impl EchoTool {
    /// Create a new echo tool
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for EchoTool {
    fn name(&self) -> &str {
        "echo"
    }

    fn description(&self) -> &str {
        "Echo back the provided input. Useful for testing and debugging."
    }

    async fn invoke(&self, input: &str) -> Result<String> {
        Ok(input.to_string())
    }
}
