//! Error types for the stepact reasoning controller.

use thiserror::Error;

/// Result type alias for reasoning operations
pub type Result<T> = std::result::Result<T, AgentError>;

/// Error types for reasoning-step operations
#[derive(Error, Debug)]
pub enum AgentError {
    /// Model output matched neither the final-answer nor the action pattern
    #[error("Could not parse model output into a decision: {raw}")]
    ParseFailure {
        /// The unparsed model output, kept for diagnostics
        raw: String,
    },

    /// A parsed action named a tool absent from the registry
    #[error("Unknown tool '{name}' requested by the model")]
    UnknownTool {
        /// The tool name the model asked for
        name: String,
    },

    /// Language model collaborator failure (network, provider, empty response)
    #[error("Language model error: {message}")]
    Llm {
        /// Error message
        message: String,
    },

    /// Tool execution failure
    #[error("Tool error: {tool_name} - {message}")]
    Tool {
        /// Tool name
        tool_name: String,
        /// Error message
        message: String,
    },

    /// Registry or client configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// Session exceeded its step budget without reaching a final answer
    #[error("Step limit of {max_steps} reached without a final answer")]
    StepLimitExceeded {
        /// The configured maximum number of reasoning steps
        max_steps: usize,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AgentError {
    /// Create a parse failure carrying the raw model output
    pub fn parsing(raw: impl Into<String>) -> Self {
        Self::ParseFailure { raw: raw.into() }
    }

    /// Create an unknown-tool error
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool { name: name.into() }
    }

    /// Create a language model error
    pub fn llm(message: impl Into<String>) -> Self {
        Self::Llm {
            message: message.into(),
        }
    }

    /// Create a tool error
    pub fn tool(tool_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Tool {
            tool_name: tool_name.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::ParseFailure { .. } => "parse",
            Self::UnknownTool { .. } => "unknown_tool",
            Self::Llm { .. } => "llm",
            Self::Tool { .. } => "tool",
            Self::Configuration { .. } => "configuration",
            Self::StepLimitExceeded { .. } => "step_limit",
            Self::Serialization(_) => "serialization",
        }
    }
}

// Convert from anyhow errors raised inside tool implementations
impl From<anyhow::Error> for AgentError {
    fn from(err: anyhow::Error) -> Self {
        Self::tool("unknown", format!("{err}"))
    }
}
