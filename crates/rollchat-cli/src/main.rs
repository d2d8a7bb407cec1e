mod cli;
mod config;
mod paths;
mod repl;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use cli::Cli;
use rollchat_ai::GeminiClient;
use rollchat_core::{ChatConfig, ChatSession};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let file_config = config::CliConfig::load();

    // Configure logging: always write to file, keeping stdout clean for the
    // conversation itself.
    let log_dir = paths::logs_dir()?;
    let file_appender = tracing_appender::rolling::daily(log_dir, "rollchat.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .init();

    let api_key = cli
        .api_key
        .clone()
        .or_else(|| file_config.api_keys.gemini.clone())
        .context(
            "Could not initialize Gemini client. \
             Set GEMINI_API_KEY or api_keys.gemini in ~/.rollchat/config.toml",
        )?;

    let chat_config = build_chat_config(&cli, &file_config);
    tracing::info!(
        primary_model = %chat_config.primary_model,
        summary_model = %chat_config.summary_model,
        "starting rollchat"
    );
    let client = Arc::new(GeminiClient::new(api_key));
    let mut session = ChatSession::start(client, chat_config).await;

    let result = repl::run(&mut session, cli.show_summary).await;

    // Flush file logs before deciding the exit code.
    drop(guard);
    if result.is_err() {
        std::process::exit(1);
    }
    Ok(())
}

/// Resolve session settings: CLI flag > config file > built-in default.
fn build_chat_config(cli: &Cli, file_config: &config::CliConfig) -> ChatConfig {
    let mut chat_config = ChatConfig::default();

    if let Some(model) = cli.model.clone().or_else(|| file_config.default.model.clone()) {
        chat_config = chat_config.with_primary_model(model);
    }
    if let Some(model) = cli
        .summary_model
        .clone()
        .or_else(|| file_config.default.summary_model.clone())
    {
        chat_config = chat_config.with_summary_model(model);
    }
    if let Some(turns) = cli
        .max_recent_turns
        .or(file_config.default.max_recent_turns)
    {
        chat_config = chat_config.with_max_recent_turns(turns);
    }

    chat_config
}
