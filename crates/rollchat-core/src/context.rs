//! Prompt assembly for the primary model.

use crate::history::{TurnWindow, format_transcript};
use crate::summarizer::NO_HISTORY_DIGEST;

/// Build the chat prompt from the current conversation state.
///
/// Fixed section order: behavioral instructions, the rolling digest, then
/// the retained turns formatted exactly as the summarizer saw them. A
/// missing digest falls back to the first-turn sentinel. Pure: no model
/// call, no other failure mode.
pub fn build_context(
    system_instruction: &str,
    digest: Option<&str>,
    recent_turns: &TurnWindow,
) -> String {
    let digest = digest.unwrap_or(NO_HISTORY_DIGEST);
    let transcript = format_transcript(recent_turns.turns());

    format!(
        "{system_instruction}\n\nConversation Summary:\n{digest}\n\nRecent Turns:\n{transcript}\n"
    )
}
