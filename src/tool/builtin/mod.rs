//! Built-in tools shipped with the crate.

pub mod echo;
pub mod text_length;

pub use echo::EchoTool;
pub use text_length::TextLengthTool;
