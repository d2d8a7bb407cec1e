//! LLM module - provider abstraction behind one text-generation trait

mod client;
mod gemini;
#[cfg(any(test, feature = "test-utils"))]
mod mock_client;

pub use client::LlmClient;
pub use gemini::GeminiClient;
#[cfg(any(test, feature = "test-utils"))]
pub use mock_client::{MockLlmClient, MockReply, RecordedCall};
