//! Agent implementations.

pub mod react;
