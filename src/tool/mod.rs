//! Tool system for agent capabilities.
//!
//! A tool is a named, externally implemented capability the model may request
//! by name. Tools take a plain string input and return a plain string
//! observation; anything richer (JSON arguments, schemas) belongs to the tool
//! implementation, not this seam.

use crate::error::Result;
use async_trait::async_trait;

pub mod builtin;
pub mod registry;

pub use registry::ToolRegistry;

/// Core tool trait that all tools must implement
#[async_trait]
pub trait Tool: Send + Sync + std::fmt::Debug {
    /// Unique name the model uses to request this tool
    fn name(&self) -> &str;

    /// Human-readable description, used only for prompt rendering
    fn description(&self) -> &str;

    /// Execute the tool with the given input
    async fn invoke(&self, input: &str) -> Result<String>;
}
