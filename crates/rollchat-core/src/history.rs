//! Turn window - bounded verbatim history for one conversation
//!
//! Stores completed turns in chronological order. The window itself is
//! append-only; shrinking happens through the pure [`TurnWindow::trim_to_recent`]
//! operation, which the summarizer applies only after the dropped turns have
//! been folded into the digest.

use serde::{Deserialize, Serialize};

/// One user message paired with the agent's response to it.
///
/// Turns are immutable once created: they are only ever appended, trimmed
/// away, or carried along inside a digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub user_message: String,
    pub agent_response: String,
}

impl Turn {
    /// Create a new turn.
    pub fn new(user_message: impl Into<String>, agent_response: impl Into<String>) -> Self {
        Self {
            user_message: user_message.into(),
            agent_response: agent_response.into(),
        }
    }
}

/// Ordered sequence of turns, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnWindow {
    turns: Vec<Turn>,
}

impl TurnWindow {
    /// Create an empty window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed turn at the end.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Get the number of turns currently stored.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Check whether the window is empty.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Get all turns as a slice, oldest first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Return the last `k` turns in original order.
    ///
    /// Pure: the receiver is untouched. Windows already within the bound
    /// come back unchanged.
    pub fn trim_to_recent(&self, k: usize) -> TurnWindow {
        let start = self.turns.len().saturating_sub(k);
        TurnWindow {
            turns: self.turns[start..].to_vec(),
        }
    }
}

impl FromIterator<Turn> for TurnWindow {
    fn from_iter<I: IntoIterator<Item = Turn>>(iter: I) -> Self {
        Self {
            turns: iter.into_iter().collect(),
        }
    }
}

/// Format turns as alternating `User:` / `Bot:` lines, one pair per turn.
///
/// This is the one transcript shape in the system: the summarizer embeds it
/// in the digest prompt and the context builder embeds it in the chat
/// prompt, so the model sees recent turns exactly as they were summarized.
pub fn format_transcript(turns: &[Turn]) -> String {
    turns
        .iter()
        .map(|turn| format!("User: {}\nBot: {}", turn.user_message, turn.agent_response))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_of(n: usize) -> TurnWindow {
        (0..n)
            .map(|i| Turn::new(format!("question {i}"), format!("answer {i}")))
            .collect()
    }

    #[test]
    fn push_keeps_chronological_order() {
        let mut window = TurnWindow::new();
        window.push(Turn::new("first", "one"));
        window.push(Turn::new("second", "two"));

        assert_eq!(window.len(), 2);
        assert_eq!(window.turns()[0].user_message, "first");
        assert_eq!(window.turns()[1].user_message, "second");
    }

    #[test]
    fn trim_is_identity_within_bound() {
        for len in 0..=3 {
            let window = window_of(len);
            assert_eq!(window.trim_to_recent(3), window);
        }
    }

    #[test]
    fn trim_keeps_exactly_the_last_k_in_order() {
        let window = window_of(7);
        let trimmed = window.trim_to_recent(3);

        assert_eq!(trimmed.len(), 3);
        assert_eq!(trimmed.turns(), &window.turns()[4..]);
        // Receiver untouched.
        assert_eq!(window.len(), 7);
    }

    #[test]
    fn transcript_alternates_user_and_bot_lines() {
        let window = window_of(2);
        let transcript = format_transcript(window.turns());

        assert_eq!(
            transcript,
            "User: question 0\nBot: answer 0\nUser: question 1\nBot: answer 1"
        );
    }

    #[test]
    fn transcript_of_empty_window_is_empty() {
        assert_eq!(format_transcript(&[]), "");
    }
}
