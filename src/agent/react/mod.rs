//! ReAct (Reasoning and Acting) step controller.
//!
//! The ReAct pattern alternates reasoning ("Thought"), tool invocation
//! ("Action"/"Action Input"), and result feedback ("Observation") until the
//! model declares a final answer. This module splits the pattern into:
//!
//! 1. **Formatter** - renders the reasoning prompt from question, tools, and
//!    transcript
//! 2. **Output parser** - classifies raw model text as action or final answer
//! 3. **Step controller** - one render/generate/parse round, no looping
//! 4. **Executor** - the caller-side loop with a step budget
//!
//! The split keeps the controller a pure step function: re-invoke it with an
//! updated transcript until it produces a final answer.

pub mod executor;
pub mod formatter;
pub mod output_parser;
pub mod step;

// Re-export main components
pub use executor::{ReActConfig, ReActExecutor, SessionOutcome};
pub use formatter::{ReActFormatter, format_transcript};
pub use output_parser::ReActOutputParser;
pub use step::StepController;
