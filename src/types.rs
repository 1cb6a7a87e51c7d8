//! Core decision types produced by a reasoning step.
//!
//! Every controller invocation yields exactly one [`Decision`]: either the
//! model wants a tool executed ([`ToolAction`]) or it is done
//! ([`FinalAnswer`]). Ambiguous model output never defaults to a variant;
//! it fails parsing instead.

use serde::{Deserialize, Serialize};

/// A request to execute a named tool with a string input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolAction {
    /// Name of the tool to invoke, as emitted by the model
    pub tool_name: String,
    /// Input to pass to the tool, with surrounding quotes stripped
    pub tool_input: String,
    /// The model's action text as emitted, truncated before any fabricated
    /// `Observation` fragment. Replayed verbatim into later prompts.
    pub raw_log: String,
}

impl ToolAction {
    /// Create a new tool action
    pub fn new(
        tool_name: impl Into<String>,
        tool_input: impl Into<String>,
        raw_log: impl Into<String>,
    ) -> Self {
        Self {
            tool_name: tool_name.into(),
            tool_input: tool_input.into(),
            raw_log: raw_log.into(),
        }
    }
}

/// The model's final answer to the original question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalAnswer {
    /// The answer text, trimmed of surrounding whitespace
    pub output: String,
    /// The full raw model output that produced this answer
    pub raw_log: String,
}

impl FinalAnswer {
    /// Create a new final answer
    pub fn new(output: impl Into<String>, raw_log: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            raw_log: raw_log.into(),
        }
    }
}

/// Outcome of a single reasoning step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// The model proposed a tool invocation
    Action(ToolAction),
    /// The model produced a final answer
    Finish(FinalAnswer),
}

impl Decision {
    /// Check whether this decision is a tool action
    #[must_use]
    pub fn is_action(&self) -> bool {
        matches!(self, Decision::Action(_))
    }

    /// Check whether this decision is a final answer
    #[must_use]
    pub fn is_finish(&self) -> bool {
        matches!(self, Decision::Finish(_))
    }

    /// Get the action if this decision is one
    #[must_use]
    pub fn as_action(&self) -> Option<&ToolAction> {
        match self {
            Decision::Action(action) => Some(action),
            Decision::Finish(_) => None,
        }
    }

    /// Get the final answer if this decision is one
    #[must_use]
    pub fn as_finish(&self) -> Option<&FinalAnswer> {
        match self {
            Decision::Action(_) => None,
            Decision::Finish(answer) => Some(answer),
        }
    }

    /// The raw model output behind this decision
    #[must_use]
    pub fn raw_log(&self) -> &str {
        match self {
            Decision::Action(action) => &action.raw_log,
            Decision::Finish(answer) => &answer.raw_log,
        }
    }
}
