//! Caller-side reasoning loop with a step budget.
//!
//! The controller itself never loops. This executor packages the recommended
//! driving behavior: step, resolve the named tool, execute it, append the
//! observation, and go again until a final answer or the budget runs out.

use crate::{
    agent::react::step::StepController,
    error::{AgentError, Result},
    tool::ToolRegistry,
    transcript::{Transcript, TranscriptEntry},
    types::Decision,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

/// Executor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReActConfig {
    /// Maximum number of reasoning steps before giving up
    pub max_steps: usize,
    /// Whether an unknown tool name becomes a corrective observation instead
    /// of aborting the session
    pub recover_unknown_tool: bool,
}

impl Default for ReActConfig {
    fn default() -> Self {
        Self {
            max_steps: 10,
            recover_unknown_tool: true,
        }
    }
}

impl ReActConfig {
    /// Create a configuration with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the step budget
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Enable or disable unknown-tool recovery
    #[must_use]
    pub fn with_unknown_tool_recovery(mut self, recover: bool) -> Self {
        self.recover_unknown_tool = recover;
        self
    }
}

/// Result of a completed reasoning session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOutcome {
    /// Identifier of the session that produced this outcome, matching the
    /// `session` field in its log records
    pub session_id: Uuid,
    /// The final answer text
    pub answer: String,
    /// Every completed action/observation round
    pub transcript: Transcript,
    /// Number of reasoning steps taken, including the final one
    pub steps_taken: usize,
}

/// Drives a [`StepController`] to completion.
///
/// An executor is reusable; every `run` call is an independent session with
/// its own transcript and its own session id.
#[derive(Debug)]
pub struct ReActExecutor {
    /// The step controller
    controller: StepController,
    /// Available tools
    registry: ToolRegistry,
    /// Loop configuration
    config: ReActConfig,
}

impl ReActExecutor {
    /// Create an executor with the default configuration
    pub fn new(controller: StepController, registry: ToolRegistry) -> Self {
        Self::with_config(controller, registry, ReActConfig::default())
    }

    /// Create an executor with an explicit configuration
    pub fn with_config(
        controller: StepController,
        registry: ToolRegistry,
        config: ReActConfig,
    ) -> Self {
        Self {
            controller,
            registry,
            config,
        }
    }

    /// Get the executor configuration
    #[must_use]
    pub fn config(&self) -> &ReActConfig {
        &self.config
    }

    /// Run the reasoning loop until a final answer or budget exhaustion.
    ///
    /// Strictly sequential: the observation for round *n* is appended before
    /// the prompt for round *n + 1* is rendered.
    pub async fn run(&self, question: &str) -> Result<SessionOutcome> {
        let session_id = Uuid::new_v4();
        let mut transcript = Transcript::new();

        for step_no in 1..=self.config.max_steps {
            let decision = self
                .controller
                .step(question, &self.registry, &transcript)
                .await?;

            match decision {
                Decision::Finish(answer) => {
                    info!(
                        session = %session_id,
                        steps = step_no,
                        "Session finished with an answer"
                    );
                    return Ok(SessionOutcome {
                        session_id,
                        answer: answer.output,
                        transcript,
                        steps_taken: step_no,
                    });
                }
                Decision::Action(action) => {
                    let observation = match self.registry.resolve(&action.tool_name) {
                        Ok(tool) => tool.invoke(&action.tool_input).await?,
                        Err(AgentError::UnknownTool { name }) if self.config.recover_unknown_tool => {
                            warn!(
                                session = %session_id,
                                tool = %name,
                                "Model requested unknown tool, feeding back a correction"
                            );
                            format!(
                                "Error: '{}' is not a valid tool, try one of [{}].",
                                name,
                                self.registry.tool_names().join(", ")
                            )
                        }
                        Err(err) => return Err(err),
                    };

                    info!(
                        session = %session_id,
                        step = step_no,
                        tool = %action.tool_name,
                        "Completed action round"
                    );
                    transcript.push(TranscriptEntry::new(action, observation));
                }
            }
        }

        Err(AgentError::StepLimitExceeded {
            max_steps: self.config.max_steps,
        })
    }
}
