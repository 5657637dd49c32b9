//! Prompting-style experiments against a hosted text-generation endpoint.
//!
//! This crate compares zero-shot, few-shot, and chain-of-thought prompting
//! through a single HTTP inference helper: [`InferenceClient`] builds one
//! request per prompt, sends it with a fixed timeout, and classifies the ways
//! the call can fail into typed [`Error`] variants. The runnable comparisons
//! live under `demos/`.

pub mod client;
pub mod config;
pub mod error;
pub mod generator;
pub mod prompt;
pub mod types;

// Re-export core types for easy usage
pub use client::{InferenceClient, NO_RESPONSE_PLACEHOLDER};
pub use config::{InferenceConfig, DEFAULT_TIMEOUT};
pub use error::Error;
pub use generator::TextGenerator;
pub use prompt::{Prompt, REASONING_CUE};
pub use types::GenerationParams;
