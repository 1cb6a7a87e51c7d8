//! Language model collaborator seam.
//!
//! The controller treats text generation as a black box: prompt in, raw text
//! out. Provider choice, credentials, and sampling parameters are client
//! configuration, not controller concerns.

use crate::error::Result;
use async_trait::async_trait;

pub mod scripted;
pub mod siumai_client;

pub use scripted::ScriptedLanguageModel;
pub use siumai_client::{LlmClientConfig, SiumaiGenerator};

/// Stop sequences the controller passes on every generation call.
///
/// Generation must halt before the model emits its own `Observation:` text;
/// a fabricated observation would corrupt the transcript. The variant without
/// the leading newline catches models that put the token mid-line.
pub const OBSERVATION_STOP: [&str; 2] = ["\nObservation", "Observation"];

/// Text generation collaborator used by the step controller
#[async_trait]
pub trait LanguageModel: Send + Sync + std::fmt::Debug {
    /// Generate a completion for the prompt, halting at the first occurrence
    /// of any stop sequence. The stop sequence itself is not included in the
    /// returned text.
    async fn generate(&self, prompt: &str, stop_sequences: &[&str]) -> Result<String>;
}

/// Truncate `text` at the earliest occurrence of any stop sequence.
///
/// Providers differ in whether they enforce stop tokens server-side; clients
/// in this crate apply them locally as well so callers get uniform behavior.
#[must_use]
pub fn apply_stop_sequences<'a>(text: &'a str, stop_sequences: &[&str]) -> &'a str {
    let cut = stop_sequences
        .iter()
        .filter_map(|stop| text.find(stop))
        .min();

    match cut {
        Some(idx) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_stop_sequences_truncates_at_earliest() {
        let text = "Thought: hm\nAction: echo\nAction Input: hi\nObservation: fake";
        let cut = apply_stop_sequences(text, &OBSERVATION_STOP);
        assert_eq!(cut, "Thought: hm\nAction: echo\nAction Input: hi");
    }

    #[test]
    fn test_apply_stop_sequences_no_match() {
        let text = "Final Answer: 42";
        assert_eq!(apply_stop_sequences(text, &OBSERVATION_STOP), text);
    }

    #[test]
    fn test_mid_line_observation_token() {
        let text = "Action: echo Observation fabricated";
        assert_eq!(
            apply_stop_sequences(text, &OBSERVATION_STOP),
            "Action: echo "
        );
    }
}
