//! ReAct output parser for processing LLM responses.
//!
//! Raw model text is classified as either a tool action or a final answer.
//! Text matching neither pattern is a parse failure; the parser never
//! defaults to a variant.

use crate::{
    error::{AgentError, Result},
    types::{Decision, FinalAnswer, ToolAction},
};
use regex::Regex;

/// Marker introducing a final answer. Matching is case-sensitive.
const FINAL_ANSWER_MARKER: &str = "Final Answer:";

/// ReAct output parser
#[derive(Debug, Clone)]
pub struct ReActOutputParser {
    /// Regex extracting the tool name and tool input of an action block
    action_regex: Regex,
}

impl ReActOutputParser {
    /// Create a new ReAct output parser
    #[must_use]
    pub fn new() -> Self {
        // Tool name runs to end of line after `Action:`; the input is the
        // remainder of the `Action Input:` line.
        let action_regex =
            Regex::new(r"Action:[ \t]*([^\n]+?)[ \t]*\r?\n\s*Action Input:[ \t]*([^\n\r]*)")
                .expect("invalid action regex");

        Self { action_regex }
    }

    /// Parse raw model output into a [`Decision`].
    ///
    /// Final-answer detection takes precedence over action detection: a model
    /// that emits both markers is assumed to have corrected itself.
    pub fn parse(&self, raw_text: &str) -> Result<Decision> {
        if let Some(answer) = self.try_parse_final_answer(raw_text) {
            return Ok(Decision::Finish(answer));
        }

        if let Some(action) = self.try_parse_action(raw_text) {
            return Ok(Decision::Action(action));
        }

        Err(AgentError::parsing(raw_text))
    }

    /// Try to parse a final answer
    fn try_parse_final_answer(&self, raw_text: &str) -> Option<FinalAnswer> {
        let idx = raw_text.find(FINAL_ANSWER_MARKER)?;
        let output = raw_text[idx + FINAL_ANSWER_MARKER.len()..].trim();

        Some(FinalAnswer::new(output, raw_text))
    }

    /// Try to parse an action block
    fn try_parse_action(&self, raw_text: &str) -> Option<ToolAction> {
        let captures = self.action_regex.captures(raw_text)?;

        let tool_name = captures.get(1)?.as_str().trim().to_string();
        let input_match = captures.get(2)?;
        let tool_input = input_match
            .as_str()
            .trim()
            .trim_matches(|c| c == '"' || c == '\'')
            .to_string();

        // Providers do not always honor the stop token; drop any fabricated
        // observation text the model appended after its action.
        let raw_log = match raw_text[input_match.end()..].find("Observation") {
            Some(offset) => raw_text[..input_match.end() + offset].trim_end(),
            None => raw_text.trim_end(),
        };

        Some(ToolAction::new(tool_name, tool_input, raw_log))
    }
}

impl Default for ReActOutputParser {
    fn default() -> Self {
        Self::new()
    }
}
