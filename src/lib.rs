//! # Stepact
//!
//! A single-step ReAct reasoning controller: given a question, a registry of
//! named tools, and a transcript of prior action/observation rounds, produce
//! exactly one decision — the next tool action, or the final answer.
//!
//! The controller never loops internally. The caller re-invokes it with an
//! updated transcript until a final answer appears or a step budget runs out;
//! [`agent::react::ReActExecutor`] packages that loop for convenience.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use stepact::prelude::*;
//!
//! # async fn run() -> stepact::Result<()> {
//! let mut registry = ToolRegistry::new();
//! registry.register(Arc::new(TextLengthTool::new()))?;
//!
//! let llm = Arc::new(SiumaiGenerator::openai("sk-...", "gpt-4o-mini").await?);
//! let executor = ReActExecutor::new(StepController::new(llm), registry);
//!
//! let outcome = executor
//!     .run("What is the length of 'DOG' in characters?")
//!     .await?;
//! println!("{}", outcome.answer);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **Tools** are named, externally implemented capabilities behind a
//!   string-in/string-out trait
//! - **The formatter** renders a deterministic reasoning prompt
//! - **The language model** is a black-box collaborator stopped at the
//!   `Observation` token so it cannot fabricate tool results
//! - **The output parser** classifies raw text, failing loudly on ambiguity
//! - **The executor** owns the transcript and drives the loop

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod agent;
pub mod error;
pub mod llm;
pub mod tool;
pub mod transcript;
pub mod types;

// Re-export key types at crate root for convenience
pub use error::{AgentError, Result};
pub use transcript::{Transcript, TranscriptEntry};
pub use types::{Decision, FinalAnswer, ToolAction};

/// Convenient imports for common usage
pub mod prelude {
    pub use crate::agent::react::{
        ReActConfig, ReActExecutor, ReActFormatter, ReActOutputParser, SessionOutcome,
        StepController,
    };
    pub use crate::error::{AgentError, Result};
    pub use crate::llm::{
        LanguageModel, OBSERVATION_STOP, ScriptedLanguageModel, SiumaiGenerator,
    };
    pub use crate::tool::{
        Tool, ToolRegistry,
        builtin::{EchoTool, TextLengthTool},
    };
    pub use crate::transcript::{Transcript, TranscriptEntry};
    pub use crate::types::{Decision, FinalAnswer, ToolAction};
}

/// Version information for the stepact library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
