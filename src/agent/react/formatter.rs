//! Prompt rendering for ReAct reasoning steps.
//!
//! The formatter turns a question, the tool registry, and the transcript into
//! the single prompt string handed to the language model. Rendering is pure
//! and deterministic; identical inputs produce byte-identical prompts.

use crate::{tool::ToolRegistry, transcript::Transcript};

/// Default ReAct prompt template.
///
/// The prompt ends open-ended after `Thought: ` so the model continues with
/// its reasoning rather than a final-answer marker.
const DEFAULT_REACT_TEMPLATE: &str = r"Answer the following questions as best you can. You have access to the following tools:

{tool_descriptions}

Use the following format:

Question: the input question you must answer
Thought: you should always think about what to do
Action: the action to take, should be one of [{tool_names}]
Action Input: the input to the action
Observation: the result of the action
... (this Thought/Action/Action Input/Observation can repeat N times)
Thought: I now know the final answer
Final Answer: the final answer to the original input question

Begin!

Question: {question}
Thought: {scratchpad}";

/// Serialize the transcript into scratchpad text.
///
/// Each entry contributes its action text exactly as the model emitted it,
/// the `Observation:` line with the tool's result, and a trailing `Thought: `
/// cue for the next round. Entries appear in completion order, never
/// reordered or deduplicated.
#[must_use]
pub fn format_transcript(transcript: &Transcript) -> String {
    let mut scratchpad = String::new();
    for entry in transcript.entries() {
        scratchpad.push_str(&entry.action.raw_log);
        scratchpad.push_str("\nObservation: ");
        scratchpad.push_str(&entry.observation);
        scratchpad.push_str("\nThought: ");
    }
    scratchpad
}

/// ReAct prompt formatter
#[derive(Debug, Clone)]
pub struct ReActFormatter {
    /// Prompt template with `{tool_descriptions}`, `{tool_names}`,
    /// `{question}`, and `{scratchpad}` placeholders
    template: String,
}

impl ReActFormatter {
    /// Create a formatter with the default template
    #[must_use]
    pub fn new() -> Self {
        Self {
            template: DEFAULT_REACT_TEMPLATE.to_string(),
        }
    }

    /// Create a formatter with a custom template
    pub fn with_template(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Get the template text
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Render the prompt for one reasoning step
    #[must_use]
    pub fn render(
        &self,
        question: &str,
        registry: &ToolRegistry,
        transcript: &Transcript,
    ) -> String {
        self.template
            .replace("{tool_descriptions}", &self.tool_descriptions(registry))
            .replace("{tool_names}", &registry.tool_names().join(", "))
            .replace("{question}", question)
            .replace("{scratchpad}", &format_transcript(transcript))
    }

    /// One `name: description` line per tool, in registration order
    fn tool_descriptions(&self, registry: &ToolRegistry) -> String {
        registry
            .tools()
            .iter()
            .map(|tool| format!("{}: {}", tool.name(), tool.description()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for ReActFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Utility functions for working with rendered transcript text
pub mod utils {
    /// Recover the observation lines from scratchpad text, in order
    #[must_use]
    pub fn extract_observations(text: &str) -> Vec<&str> {
        text.lines()
            .filter_map(|line| line.strip_prefix("Observation: "))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        tool::builtin::{EchoTool, TextLengthTool},
        transcript::TranscriptEntry,
        types::ToolAction,
    };
    use std::sync::Arc;

    fn registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(TextLengthTool::new())).unwrap();
        registry.register(Arc::new(EchoTool::new())).unwrap();
        registry
    }

    #[test]
    fn test_render_embeds_question_and_tools() {
        let formatter = ReActFormatter::new();
        let prompt = formatter.render("What is 2 + 2?", &registry(), &Transcript::new());

        assert!(prompt.contains("What is 2 + 2?"));
        assert!(prompt.contains("text_length: Calculate the length of the given text in characters."));
        assert!(prompt.contains("echo: Echo back the provided input."));
        assert!(prompt.contains("[text_length, echo]"));
        assert!(prompt.ends_with("Thought: "));
    }

    #[test]
    fn test_render_is_deterministic() {
        let formatter = ReActFormatter::new();
        let registry = registry();
        let mut transcript = Transcript::new();
        transcript.push(TranscriptEntry::new(
            ToolAction::new("echo", "hi", "Thought: test\nAction: echo\nAction Input: hi"),
            "hi",
        ));

        let first = formatter.render("Q", &registry, &transcript);
        let second = formatter.render("Q", &registry, &transcript);
        assert_eq!(first, second);
    }

    #[test]
    fn test_scratchpad_replays_action_log_verbatim() {
        let raw_log = "Thought: I should measure\nAction: text_length\nAction Input: \"DOG\"";
        let mut transcript = Transcript::new();
        transcript.push(TranscriptEntry::new(
            ToolAction::new("text_length", "DOG", raw_log),
            "3",
        ));

        let scratchpad = format_transcript(&transcript);
        assert!(scratchpad.starts_with(raw_log));
        assert!(scratchpad.contains("\nObservation: 3\n"));
        assert!(scratchpad.ends_with("Thought: "));
    }

    #[test]
    fn test_transcript_serialization_round_trip() {
        let mut transcript = Transcript::new();
        for i in 0..4 {
            transcript.push(TranscriptEntry::new(
                ToolAction::new("echo", format!("in-{i}"), format!("Action: echo\nAction Input: in-{i}")),
                format!("out-{i}"),
            ));
        }

        let scratchpad = format_transcript(&transcript);
        let observations = utils::extract_observations(&scratchpad);
        assert_eq!(observations, vec!["out-0", "out-1", "out-2", "out-3"]);
    }
}
