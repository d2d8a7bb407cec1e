//! Rollchat AI - LLM provider layer
//!
//! This crate provides:
//! - A single text-generation trait shared by every model call site
//! - Gemini provider over the Generative Language REST API
//! - Deterministic scripted mock for tests (behind `test-utils`)

pub mod error;
mod http_client;
pub mod llm;

// Re-export commonly used types
pub use error::{AiError, Result};
pub use llm::{GeminiClient, LlmClient};
#[cfg(any(test, feature = "test-utils"))]
pub use llm::{MockLlmClient, MockReply, RecordedCall};
