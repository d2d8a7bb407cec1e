use clap::Parser;

#[derive(Parser)]
#[command(name = "rollchat")]
#[command(version, about = "Terminal chatbot with rolling conversation summaries")]
pub struct Cli {
    /// Primary chat model
    #[arg(long)]
    pub model: Option<String>,

    /// Summarization model
    #[arg(long)]
    pub summary_model: Option<String>,

    /// Turns kept verbatim after each summarization pass
    #[arg(long)]
    pub max_recent_turns: Option<usize>,

    /// Print the rolling summary after each turn
    #[arg(long)]
    pub show_summary: bool,

    /// Gemini API key (falls back to the config file)
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}
