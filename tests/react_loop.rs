//! End-to-end tests driving the step controller through full sessions
//! with a scripted language model.

mod common;

use common::{init_tracing, text_length_registry};
use std::sync::Arc;
use stepact::agent::react::formatter::{self, format_transcript};
use stepact::prelude::*;

const QUESTION: &str = "What is the length of 'DOG' in characters?";

#[tokio::test]
async fn first_step_proposes_text_length_action() {
    init_tracing();
    let model = ScriptedLanguageModel::with_responses([
        "Thought: I should use text_length\nAction: text_length\nAction Input: \"DOG\"\nObservation",
    ]);
    let controller = StepController::new(Arc::new(model));

    let decision = controller
        .step(QUESTION, &text_length_registry(), &Transcript::new())
        .await
        .expect("step failed");

    let action = decision.as_action().expect("expected an action");
    assert_eq!(action.tool_name, "text_length");
    assert_eq!(action.tool_input, "DOG");
}

#[tokio::test]
async fn second_step_with_observation_finishes() {
    init_tracing();
    let model = ScriptedLanguageModel::with_responses([
        "Thought: I now know the final answer\nFinal Answer: 3",
    ]);
    let controller = StepController::new(Arc::new(model));

    let mut transcript = Transcript::new();
    transcript.push(TranscriptEntry::new(
        ToolAction::new(
            "text_length",
            "DOG",
            "Thought: I should use text_length\nAction: text_length\nAction Input: \"DOG\"",
        ),
        "3",
    ));

    let decision = controller
        .step(QUESTION, &text_length_registry(), &transcript)
        .await
        .expect("step failed");

    assert_eq!(decision.as_finish().expect("expected an answer").output, "3");
}

#[tokio::test]
async fn resolving_a_nonexistent_tool_fails_without_executing_anything() {
    let registry = text_length_registry();
    let err = registry.resolve("nonexistent_tool").unwrap_err();
    assert!(matches!(err, AgentError::UnknownTool { .. }));
}

#[tokio::test]
async fn full_session_answers_the_question() {
    init_tracing();
    let model = ScriptedLanguageModel::with_responses([
        "Thought: I should use text_length\nAction: text_length\nAction Input: \"DOG\"\nObservation",
        "Thought: I now know the final answer\nFinal Answer: 3",
    ]);
    let controller = StepController::new(Arc::new(model.clone()));
    let executor = ReActExecutor::new(controller, text_length_registry());

    let outcome = executor.run(QUESTION).await.expect("session failed");

    assert_eq!(outcome.answer, "3");
    assert_eq!(outcome.steps_taken, 2);
    assert_eq!(outcome.transcript.len(), 1);
    assert_eq!(outcome.transcript.entries()[0].observation, "3");

    // The second prompt replayed the first round's action text and the real
    // observation produced by the tool.
    let prompts = model.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[1].contains("Action: text_length"));
    assert!(prompts[1].contains("Observation: 3"));
}

#[tokio::test]
async fn fabricated_observations_never_reach_the_transcript() {
    // This provider "ignores" the stop token and fabricates an observation.
    // The scripted client truncates, and the parser would drop the fragment
    // from the action log even if it did not.
    init_tracing();
    let model = ScriptedLanguageModel::with_responses([
        "Thought: measuring\nAction: text_length\nAction Input: \"DOG\"\nObservation: 9000\nThought: done",
        "Thought: I now know the final answer\nFinal Answer: 3",
    ]);
    let controller = StepController::new(Arc::new(model.clone()));
    let executor = ReActExecutor::new(controller, text_length_registry());

    let outcome = executor.run(QUESTION).await.expect("session failed");

    // Real tool output, not the fabricated "9000"
    assert_eq!(outcome.transcript.entries()[0].observation, "3");
    assert!(!model.prompts()[1].contains("9000"));
}

#[test]
fn rendered_transcript_round_trips_observations() {
    let mut transcript = Transcript::new();
    for (input, observation) in [("DOG", "3"), ("MOUSE", "5"), ("OX", "2")] {
        transcript.push(TranscriptEntry::new(
            ToolAction::new(
                "text_length",
                input,
                format!("Action: text_length\nAction Input: \"{input}\""),
            ),
            observation,
        ));
    }

    let scratchpad = format_transcript(&transcript);
    let recovered = formatter::utils::extract_observations(&scratchpad);
    assert_eq!(recovered, vec!["3", "5", "2"]);
}

#[test]
fn render_embeds_every_tool_and_the_question() {
    let mut registry = text_length_registry();
    registry
        .register(Arc::new(EchoTool::new()))
        .expect("registration failed");

    let prompt = ReActFormatter::new().render(QUESTION, &registry, &Transcript::new());

    assert!(prompt.contains(QUESTION));
    for tool in registry.tools() {
        assert!(prompt.contains(tool.name()));
        assert!(prompt.contains(tool.description()));
    }
}
