//! Conversation orchestrator.
//!
//! A session drives one turn at a time through a fixed sequence: build
//! context, call the primary model, record the turn, re-summarize. A turn
//! must fully complete (including its summarization pass) before the next
//! input is accepted; the only suspension points are the two outbound model
//! calls, awaited one after the other and never overlapped.

use std::sync::Arc;

use tracing::{debug, info};

use rollchat_ai::{LlmClient, Result};

use crate::config::ChatConfig;
use crate::context::build_context;
use crate::history::{Turn, TurnWindow};
use crate::summarizer::Summarizer;

/// Exit tokens recognized on their own line, case-insensitive.
pub const EXIT_TOKENS: [&str; 2] = ["\\quit", "\\exit"];

/// Classification of one line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    /// A message to answer.
    Message(String),
    /// Blank line: re-prompt, no state advance, no turn recorded.
    Empty,
    /// Exit command: end the session, no model call.
    Exit,
}

impl UserInput {
    /// Classify a raw input line.
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        if EXIT_TOKENS
            .iter()
            .any(|token| trimmed.eq_ignore_ascii_case(token))
        {
            return Self::Exit;
        }
        Self::Message(trimmed.to_string())
    }
}

/// One conversation with rolling context.
///
/// The session is the exclusive owner of the `(digest, window)` pair;
/// collaborators receive references and return new values, and the pair is
/// replaced atomically after each round.
pub struct ChatSession {
    client: Arc<dyn LlmClient>,
    config: ChatConfig,
    summarizer: Summarizer,
    digest: String,
    window: TurnWindow,
}

impl ChatSession {
    /// Create a session and run the initial summarization pass.
    ///
    /// The pass runs over the empty window so the sentinel digest is
    /// obtained through the same code path as every later pass, rather
    /// than being special-cased here.
    pub async fn start(client: Arc<dyn LlmClient>, config: ChatConfig) -> Self {
        let summarizer = Summarizer::new(client.clone(), &config);
        let (digest, window) = summarizer.summarize(&TurnWindow::new()).await.into_state();

        info!(
            primary_model = %config.primary_model,
            summary_model = %config.summary_model,
            max_recent_turns = config.max_recent_turns,
            "chat session started"
        );

        Self {
            client,
            config,
            summarizer,
            digest,
            window,
        }
    }

    /// Answer one user message and roll the context forward.
    ///
    /// A primary-model failure propagates to the caller before anything is
    /// recorded: no partial turn exists, and the session is expected to
    /// end. After a successful response the turn is appended and the
    /// summarizer's outcome (fresh or degraded) becomes the next state.
    pub async fn respond(&mut self, user_message: &str) -> Result<String> {
        let context = build_context(
            &self.config.system_instruction,
            Some(&self.digest),
            &self.window,
        );
        let prompt = format!("{context}\nUser: {user_message}");

        let response = self
            .client
            .generate(&self.config.primary_model, &prompt)
            .await?;

        self.window.push(Turn::new(user_message, response.as_str()));

        let outcome = self.summarizer.summarize(&self.window).await;
        if outcome.is_degraded() {
            debug!(window_len = outcome.window().len(), "continuing with degraded digest");
        }
        let (digest, window) = outcome.into_state();
        self.digest = digest;
        self.window = window;

        Ok(response)
    }

    /// Current rolling digest.
    pub fn digest(&self) -> &str {
        &self.digest
    }

    /// Current retained window.
    pub fn window(&self) -> &TurnWindow {
        &self.window
    }

    /// Session configuration.
    pub fn config(&self) -> &ChatConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_wraps_messages() {
        assert_eq!(
            UserInput::parse("  hello world  "),
            UserInput::Message("hello world".to_string())
        );
    }

    #[test]
    fn parse_rejects_blank_lines() {
        assert_eq!(UserInput::parse(""), UserInput::Empty);
        assert_eq!(UserInput::parse("   \t "), UserInput::Empty);
    }

    #[test]
    fn parse_recognizes_exit_tokens_case_insensitively() {
        assert_eq!(UserInput::parse("\\quit"), UserInput::Exit);
        assert_eq!(UserInput::parse("\\exit"), UserInput::Exit);
        assert_eq!(UserInput::parse("\\QUIT"), UserInput::Exit);
        assert_eq!(UserInput::parse("  \\Exit  "), UserInput::Exit);
    }

    #[test]
    fn exit_token_inside_a_message_is_a_message() {
        assert_eq!(
            UserInput::parse("how do I \\quit vim"),
            UserInput::Message("how do I \\quit vim".to_string())
        );
    }
}
