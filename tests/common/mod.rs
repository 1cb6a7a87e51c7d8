//! Shared test utilities for integration tests

#![allow(dead_code)]

use std::sync::Arc;
use stepact::prelude::*;

/// Install a tracing subscriber for test output.
///
/// Respects `RUST_LOG`; repeated calls are fine because only the first
/// subscriber wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Registry holding only the text length tool.
pub fn text_length_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry
        .register(Arc::new(TextLengthTool::new()))
        .expect("registration failed");
    registry
}
