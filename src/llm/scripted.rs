//! Scripted language model — deterministic responses for testing without API keys.

use crate::{
    error::{AgentError, Result},
    llm::{LanguageModel, apply_stop_sequences},
};
use async_trait::async_trait;
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

/// Language model that replays a fixed queue of responses.
///
/// Each `generate` call pops the next queued response, applies the stop
/// sequences by truncation, and records the prompt it received. Running out
/// of responses is an [`AgentError::Llm`] failure, which is how a test
/// notices an unexpected extra step.
#[derive(Debug, Clone, Default)]
pub struct ScriptedLanguageModel {
    inner: Arc<Mutex<ScriptState>>,
}

#[derive(Debug, Default)]
struct ScriptState {
    responses: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedLanguageModel {
    /// Create a scripted model with no queued responses
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scripted model from a sequence of responses
    pub fn with_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let model = Self::new();
        for response in responses {
            model.push_response(response);
        }
        model
    }

    /// Queue another response
    pub fn push_response(&self, response: impl Into<String>) {
        self.inner
            .lock()
            .expect("script state lock poisoned")
            .responses
            .push_back(response.into());
    }

    /// Prompts received so far, in call order
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.inner
            .lock()
            .expect("script state lock poisoned")
            .prompts
            .clone()
    }

    /// Number of responses still queued
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.inner
            .lock()
            .expect("script state lock poisoned")
            .responses
            .len()
    }
}

#[async_trait]
impl LanguageModel for ScriptedLanguageModel {
    async fn generate(&self, prompt: &str, stop_sequences: &[&str]) -> Result<String> {
        let mut state = self.inner.lock().expect("script state lock poisoned");
        state.prompts.push(prompt.to_string());

        let response = state
            .responses
            .pop_front()
            .ok_or_else(|| AgentError::llm("Scripted model has no responses left"))?;

        Ok(apply_stop_sequences(&response, stop_sequences).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::OBSERVATION_STOP;

    #[tokio::test]
    async fn test_replays_in_order_and_records_prompts() {
        let model = ScriptedLanguageModel::with_responses(["first", "second"]);

        assert_eq!(model.generate("p1", &[]).await.unwrap(), "first");
        assert_eq!(model.generate("p2", &[]).await.unwrap(), "second");
        assert_eq!(model.prompts(), vec!["p1", "p2"]);
        assert_eq!(model.remaining(), 0);
    }

    #[tokio::test]
    async fn test_exhausted_queue_is_an_error() {
        let model = ScriptedLanguageModel::new();
        let err = model.generate("p", &[]).await.unwrap_err();
        assert_eq!(err.category(), "llm");
    }

    #[tokio::test]
    async fn test_honors_stop_sequences() {
        let model = ScriptedLanguageModel::with_responses([
            "Action: echo\nAction Input: hi\nObservation: fabricated",
        ]);

        let text = model.generate("p", &OBSERVATION_STOP).await.unwrap();
        assert_eq!(text, "Action: echo\nAction Input: hi");
    }
}
