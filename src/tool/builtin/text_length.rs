//! Text length tool - counts characters in its input.

use crate::{error::Result, tool::Tool};
use async_trait::async_trait;

/// Tool that returns the number of characters in its input
#[derive(Debug, Clone, Default)]
pub struct TextLengthTool;

impl TextLengthTool {
    /// Create a new text length tool
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for TextLengthTool {
    fn name(&self) -> &str {
        "text_length"
    }

    fn description(&self) -> &str {
        "Calculate the length of the given text in characters."
    }

    async fn invoke(&self, input: &str) -> Result<String> {
        // Count characters, not bytes, so non-ASCII input gets a sane answer
        Ok(input.chars().count().to_string())
    }
}
