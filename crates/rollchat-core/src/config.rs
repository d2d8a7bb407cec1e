//! Fixed conversation configuration.
//!
//! All values here are decided at construction time and never mutated while
//! a session runs. Defaults match the shipped behavior; the CLI may override
//! them from its config file or flags before a session starts.

/// Model answering the user directly.
pub const DEFAULT_PRIMARY_MODEL: &str = "gemini-2.5-flash";

/// Cheaper model used only to produce digests.
pub const DEFAULT_SUMMARY_MODEL: &str = "gemini-2.0-flash-lite";

/// Turns kept verbatim after each summarization pass.
pub const DEFAULT_MAX_RECENT_TURNS: usize = 3;

/// Behavioral instructions sent at the top of every chat prompt.
pub const SYSTEM_INSTRUCTION: &str = "You are a friendly, helpful terminal chatbot specializing in computer science and technical topics. \
     Respond concisely in 1-2 lines. \
     Use your own knowledge to answer questions, and use the context summary only to maintain conversation continuity.";

/// Summarization instruction template. `{history}` is replaced with the
/// formatted transcript of the full current window.
pub const SUMMARY_PROMPT_TEMPLATE: &str = include_str!("../assets/summary_prompt.txt");

/// Configuration for one chat session.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub primary_model: String,
    pub summary_model: String,
    pub max_recent_turns: usize,
    pub system_instruction: String,
    pub summary_template: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            primary_model: DEFAULT_PRIMARY_MODEL.to_string(),
            summary_model: DEFAULT_SUMMARY_MODEL.to_string(),
            max_recent_turns: DEFAULT_MAX_RECENT_TURNS,
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
            summary_template: SUMMARY_PROMPT_TEMPLATE.to_string(),
        }
    }
}

impl ChatConfig {
    /// Override the primary chat model.
    pub fn with_primary_model(mut self, model: impl Into<String>) -> Self {
        self.primary_model = model.into();
        self
    }

    /// Override the summarization model.
    pub fn with_summary_model(mut self, model: impl Into<String>) -> Self {
        self.summary_model = model.into();
        self
    }

    /// Override the retained-turn count.
    pub fn with_max_recent_turns(mut self, turns: usize) -> Self {
        self.max_recent_turns = turns;
        self
    }
}
