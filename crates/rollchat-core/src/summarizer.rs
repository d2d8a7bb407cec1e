//! Rolling digest generation over the turn window.
//!
//! Each pass folds the *full* current window into a fresh digest via the
//! secondary model, then shrinks the window to its retained tail. The digest
//! deliberately also covers the turns kept verbatim: a later trim can then
//! never drop information that only lived in the tail.

use std::sync::Arc;

use tracing::{debug, warn};

use rollchat_ai::LlmClient;

use crate::config::ChatConfig;
use crate::history::{TurnWindow, format_transcript};

/// Digest used while no real summary exists yet.
pub const NO_HISTORY_DIGEST: &str = "No prior conversation.";

/// Digest used when a summarization pass fails.
pub const DEGRADED_DIGEST: &str = "Summary unavailable.";

/// Result of one summarization pass.
///
/// The recovered-failure path is a visible branch, not an implicit catch:
/// a degraded pass hands back the failure sentinel together with the full,
/// untrimmed input window so no turn is lost before a later pass succeeds.
/// Either variant is the canonical next conversation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    /// The secondary model produced a fresh digest; the window was trimmed.
    Updated { digest: String, window: TurnWindow },
    /// Summarization failed; sentinel digest, window kept unshrunk.
    Degraded { digest: String, window: TurnWindow },
}

impl SummaryOutcome {
    /// Digest carried by this outcome.
    pub fn digest(&self) -> &str {
        match self {
            Self::Updated { digest, .. } | Self::Degraded { digest, .. } => digest,
        }
    }

    /// Window carried by this outcome.
    pub fn window(&self) -> &TurnWindow {
        match self {
            Self::Updated { window, .. } | Self::Degraded { window, .. } => window,
        }
    }

    /// Whether this pass degraded.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    /// Take ownership of the `(digest, window)` pair.
    pub fn into_state(self) -> (String, TurnWindow) {
        match self {
            Self::Updated { digest, window } | Self::Degraded { digest, window } => {
                (digest, window)
            }
        }
    }
}

/// Folds the turn window into a rolling digest via the secondary model.
pub struct Summarizer {
    client: Arc<dyn LlmClient>,
    model: String,
    template: String,
    max_recent_turns: usize,
}

impl Summarizer {
    /// Create a summarizer bound to the session's secondary model.
    pub fn new(client: Arc<dyn LlmClient>, config: &ChatConfig) -> Self {
        Self {
            client,
            model: config.summary_model.clone(),
            template: config.summary_template.clone(),
            max_recent_turns: config.max_recent_turns,
        }
    }

    /// Summarize the full window and trim it to the retained tail.
    ///
    /// An empty window short-circuits to the no-history sentinel without
    /// touching the model. Any secondary-model failure (including a digest
    /// that strips to nothing) is absorbed here: the caller always receives
    /// a usable outcome and never sees an error from this boundary.
    pub async fn summarize(&self, window: &TurnWindow) -> SummaryOutcome {
        if window.is_empty() {
            return SummaryOutcome::Updated {
                digest: NO_HISTORY_DIGEST.to_string(),
                window: TurnWindow::new(),
            };
        }

        let transcript = format_transcript(window.turns());
        let prompt = self.template.replace("{history}", &transcript);

        match self.client.generate(&self.model, &prompt).await {
            Ok(text) => {
                let digest = text.trim().to_string();
                if digest.is_empty() {
                    warn!(model = %self.model, "summarization returned a blank digest; keeping full window");
                    return SummaryOutcome::Degraded {
                        digest: DEGRADED_DIGEST.to_string(),
                        window: window.clone(),
                    };
                }

                debug!(
                    turns = window.len(),
                    digest_chars = digest.len(),
                    "rolling digest refreshed"
                );
                SummaryOutcome::Updated {
                    digest,
                    window: window.trim_to_recent(self.max_recent_turns),
                }
            }
            Err(err) => {
                warn!(error = %err, model = %self.model, "summarization failed; keeping full window");
                SummaryOutcome::Degraded {
                    digest: DEGRADED_DIGEST.to_string(),
                    window: window.clone(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rollchat_ai::{MockLlmClient, MockReply};

    use super::*;
    use crate::history::Turn;

    fn window_of(n: usize) -> TurnWindow {
        (0..n)
            .map(|i| Turn::new(format!("q{i}"), format!("a{i}")))
            .collect()
    }

    fn summarizer_with(client: &MockLlmClient) -> Summarizer {
        Summarizer::new(Arc::new(client.clone()), &ChatConfig::default())
    }

    #[tokio::test]
    async fn empty_window_short_circuits_without_model_call() {
        let client = MockLlmClient::new();
        let summarizer = summarizer_with(&client);

        let outcome = summarizer.summarize(&TurnWindow::new()).await;

        assert_eq!(
            outcome,
            SummaryOutcome::Updated {
                digest: NO_HISTORY_DIGEST.to_string(),
                window: TurnWindow::new(),
            }
        );
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn success_strips_digest_and_trims_window() {
        let client =
            MockLlmClient::from_replies(vec![MockReply::text("  Discussed sorting.  \n")]);
        let summarizer = summarizer_with(&client);
        let window = window_of(5);

        let outcome = summarizer.summarize(&window).await;

        let (digest, trimmed) = outcome.into_state();
        assert_eq!(digest, "Discussed sorting.");
        assert_eq!(trimmed, window.trim_to_recent(3));
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn prompt_embeds_transcript_and_targets_summary_model() {
        let client = MockLlmClient::from_replies(vec![MockReply::text("digest")]);
        let summarizer = summarizer_with(&client);

        summarizer.summarize(&window_of(2)).await;

        let calls = client.calls().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].model, crate::config::DEFAULT_SUMMARY_MODEL);
        assert!(calls[0].prompt.contains("User: q0\nBot: a0"));
        assert!(calls[0].prompt.contains("User: q1\nBot: a1"));
        assert!(!calls[0].prompt.contains("{history}"));
    }

    #[tokio::test]
    async fn failure_returns_sentinel_and_full_window() {
        let client = MockLlmClient::from_replies(vec![MockReply::error("quota")]);
        let summarizer = summarizer_with(&client);
        let window = window_of(6);

        let outcome = summarizer.summarize(&window).await;

        assert!(outcome.is_degraded());
        assert_eq!(outcome.digest(), DEGRADED_DIGEST);
        // Identity on the window: same turns, same order, nothing trimmed.
        assert_eq!(outcome.window(), &window);
    }

    #[tokio::test]
    async fn blank_digest_counts_as_failure() {
        let client = MockLlmClient::from_replies(vec![MockReply::text("   \n  ")]);
        let summarizer = summarizer_with(&client);
        let window = window_of(4);

        let outcome = summarizer.summarize(&window).await;

        assert!(outcome.is_degraded());
        assert_eq!(outcome.window().len(), 4);
    }

    #[tokio::test]
    async fn outcome_is_always_well_formed() {
        // Not idempotent (the model may answer differently each pass), but
        // always well-formed: non-empty digest, window within the bound.
        let client = MockLlmClient::from_replies(vec![
            MockReply::text("first digest"),
            MockReply::text("second digest"),
        ]);
        let summarizer = summarizer_with(&client);

        let first = summarizer.summarize(&window_of(5)).await;
        let (digest, window) = first.into_state();
        assert!(!digest.is_empty());
        assert!(window.len() <= 3);

        let second = summarizer.summarize(&window).await;
        assert!(!second.digest().is_empty());
        assert!(second.window().len() <= 3);
    }
}
