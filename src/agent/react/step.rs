//! The single reasoning step: render, generate, parse.

use crate::{
    agent::react::{formatter::ReActFormatter, output_parser::ReActOutputParser},
    error::Result,
    llm::{LanguageModel, OBSERVATION_STOP},
    tool::ToolRegistry,
    transcript::Transcript,
    types::Decision,
};
use std::sync::Arc;
use tracing::debug;

/// Produces exactly one [`Decision`] per invocation.
///
/// The controller renders the prompt, generates raw text with the observation
/// stop sequences configured, and parses the result. It never mutates the
/// transcript, never executes a tool, and never retries a failed parse;
/// re-invoking it with an updated transcript is the caller's job.
#[derive(Debug, Clone)]
pub struct StepController {
    /// Text generation collaborator
    llm: Arc<dyn LanguageModel>,
    /// Prompt renderer
    formatter: ReActFormatter,
    /// Decision parser
    parser: ReActOutputParser,
}

impl StepController {
    /// Create a controller with the default formatter and parser
    pub fn new(llm: Arc<dyn LanguageModel>) -> Self {
        Self {
            llm,
            formatter: ReActFormatter::new(),
            parser: ReActOutputParser::new(),
        }
    }

    /// Replace the prompt formatter
    #[must_use]
    pub fn with_formatter(mut self, formatter: ReActFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Get the prompt formatter
    #[must_use]
    pub fn formatter(&self) -> &ReActFormatter {
        &self.formatter
    }

    /// Run one reasoning step.
    ///
    /// Parse failures and model errors propagate unchanged; the caller
    /// decides whether to retry, abort, or feed a correction back in.
    pub async fn step(
        &self,
        question: &str,
        registry: &ToolRegistry,
        transcript: &Transcript,
    ) -> Result<Decision> {
        let prompt = self.formatter.render(question, registry, transcript);
        debug!(
            prompt_len = prompt.len(),
            rounds = transcript.len(),
            "Rendered reasoning prompt"
        );

        let raw_text = self.llm.generate(&prompt, &OBSERVATION_STOP).await?;
        let decision = self.parser.parse(&raw_text)?;

        debug!(
            variant = if decision.is_action() { "action" } else { "finish" },
            "Parsed model decision"
        );
        Ok(decision)
    }
}
