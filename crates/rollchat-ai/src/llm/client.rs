//! LLM client trait

use async_trait::async_trait;

use crate::error::Result;

/// Text-generation client trait
///
/// One capability covers both call sites: the chat model and the summary
/// model differ only in the `model` identifier passed per call. rollchat
/// sends fully assembled prompts and consumes plain text, so the surface is
/// deliberately prompt-in/text-out with no tool or streaming machinery.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Get provider name
    fn provider(&self) -> &str;

    /// Generate text for `prompt` using `model`
    async fn generate(&self, model: &str, prompt: &str) -> Result<String>;
}
