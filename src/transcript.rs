//! Append-only history of action/observation rounds.
//!
//! The transcript is owned by the calling loop. The controller only ever
//! reads it; entries are appended after each completed tool execution and
//! never mutated or reordered afterwards.

use crate::types::ToolAction;
use serde::{Deserialize, Serialize};

/// One completed action/observation round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// The action the model proposed
    pub action: ToolAction,
    /// What the tool returned when executed
    pub observation: String,
}

impl TranscriptEntry {
    /// Create a new transcript entry
    pub fn new(action: ToolAction, observation: impl Into<String>) -> Self {
        Self {
            action,
            observation: observation.into(),
        }
    }
}

/// Ordered sequence of completed rounds, empty at session start
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Create an empty transcript
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed round
    pub fn push(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }

    /// Entries in completion order
    #[must_use]
    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Number of completed rounds
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no rounds have completed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
