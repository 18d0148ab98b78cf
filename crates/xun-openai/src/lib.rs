//! Minimal client for an OpenAI-compatible API: chat completions, chat
//! completions constrained by a JSON schema, and image generation.

pub mod client;
pub mod error;
pub mod types;

pub use client::OpenAiClient;
pub use error::OpenAiError;
