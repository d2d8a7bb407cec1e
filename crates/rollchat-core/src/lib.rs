//! Rollchat core - rolling context management
//!
//! This crate provides:
//! - Turn window: bounded verbatim history with a pure trim operation
//! - Summarizer: folds older turns into a rolling digest via a secondary
//!   model, degrading safely when that call fails
//! - Context builder: assembles the chat prompt from digest + recent turns
//! - Chat session: the turn loop orchestrator owning conversation state

pub mod config;
pub mod context;
pub mod history;
pub mod session;
pub mod summarizer;

// Re-export commonly used types
pub use config::{ChatConfig, DEFAULT_MAX_RECENT_TURNS, DEFAULT_PRIMARY_MODEL, DEFAULT_SUMMARY_MODEL};
pub use context::build_context;
pub use history::{Turn, TurnWindow, format_transcript};
pub use session::{ChatSession, EXIT_TOKENS, UserInput};
pub use summarizer::{DEGRADED_DIGEST, NO_HISTORY_DIGEST, SummaryOutcome, Summarizer};
