//! Chat-completion integration for resume rewriting

pub mod client;
pub mod prompts;
pub mod generator;

pub use client::{CompletionClient, GroqClient, LlmError};
pub use generator::ResumeGenerator;
