//! Deterministic mock LLM client for orchestration tests.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{AiError, Result};
use crate::llm::client::LlmClient;

/// Scripted reply for the mock client.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return generated text.
    Text(String),
    /// Return an LLM error.
    Error(String),
}

impl MockReply {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }
}

/// One observed `generate` invocation.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model: String,
    pub prompt: String,
}

/// A deterministic mock LLM client driven by scripted replies.
///
/// Replies are consumed in order; once the script runs dry every call
/// succeeds with a fixed placeholder. Calls are counted and recorded so
/// tests can assert that a call did or did not happen, and what was sent.
#[derive(Debug, Clone, Default)]
pub struct MockLlmClient {
    script: Arc<Mutex<VecDeque<MockReply>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    call_count: Arc<AtomicUsize>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_replies(replies: Vec<MockReply>) -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::from(replies))),
            ..Self::default()
        }
    }

    pub async fn push_reply(&self, reply: MockReply) {
        self.script.lock().await.push_back(reply);
    }

    /// Total number of `generate` invocations observed so far.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Snapshot of all observed invocations, in order.
    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }

    async fn next_reply(&self) -> Option<MockReply> {
        self.script.lock().await.pop_front()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    fn provider(&self) -> &str {
        "mock"
    }

    async fn generate(&self, model: &str, prompt: &str) -> Result<String> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().await.push(RecordedCall {
            model: model.to_string(),
            prompt: prompt.to_string(),
        });

        match self.next_reply().await {
            Some(MockReply::Text(content)) => Ok(content),
            Some(MockReply::Error(message)) => Err(AiError::Llm(message)),
            None => Ok("mock-ok".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_client_returns_scripted_text() {
        let client = MockLlmClient::from_replies(vec![MockReply::text("hello")]);

        let text = client
            .generate("mock-model", "ping")
            .await
            .expect("mock response should succeed");

        assert_eq!(text, "hello");
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn mock_client_returns_scripted_error() {
        let client = MockLlmClient::from_replies(vec![MockReply::error("boom")]);

        let err = client.generate("mock-model", "ping").await.unwrap_err();
        assert!(matches!(err, AiError::Llm(message) if message == "boom"));
    }

    #[tokio::test]
    async fn mock_client_records_model_and_prompt() {
        let client = MockLlmClient::new();
        client.generate("model-a", "first").await.unwrap();
        client.generate("model-b", "second").await.unwrap();

        let calls = client.calls().await;
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].model, "model-a");
        assert_eq!(calls[0].prompt, "first");
        assert_eq!(calls[1].model, "model-b");
    }

    #[tokio::test]
    async fn mock_client_falls_back_when_script_is_empty() {
        let client = MockLlmClient::new();
        let text = client.generate("mock-model", "anything").await.unwrap();
        assert_eq!(text, "mock-ok");
    }
}
