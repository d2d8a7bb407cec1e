//! Error types for the provider layer

use thiserror::Error;

/// Provider layer error types
///
/// Both model call sites (chat and summarization) share this one failure
/// type; whether a failure is fatal or recovered is decided by the caller.
#[derive(Error, Debug)]
pub enum AiError {
    #[error("LLM error: {0}")]
    Llm(String),

    #[error("{provider} API error (status {status}): {message}")]
    LlmHttp {
        provider: String,
        status: u16,
        message: String,
        retry_after_secs: Option<u64>,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for provider operations
pub type Result<T> = std::result::Result<T, AiError>;
