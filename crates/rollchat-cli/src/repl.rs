//! Interactive chat loop.
//!
//! One turn fully completes (response printed, digest refreshed) before the
//! next prompt is shown. Summarization failures never surface here; a
//! primary-model failure is reported as plain text and ends the session.

use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use rollchat_core::{ChatSession, UserInput};

pub fn print_banner(session: &ChatSession) {
    let rule = "-".repeat(100);
    println!("{rule}");
    println!(" rollchat - computer science chatbot ");
    println!("{rule}");
    println!();
    println!("Main model: {}", session.config().primary_model);
    println!("Summary model: {}", session.config().summary_model);
    println!();
    println!("Type '\\quit' or '\\exit' to end the chat.");
}

/// Run the turn loop until an exit command, end of input, or a fatal error.
pub async fn run(session: &mut ChatSession, show_summary: bool) -> Result<()> {
    print_banner(session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("\n{} ", "You:".green().bold());
        std::io::stdout().flush()?;

        // EOF behaves like an exit command.
        let Some(line) = lines.next_line().await? else {
            println!("\nExiting chat. Goodbye!");
            return Ok(());
        };

        match UserInput::parse(&line) {
            UserInput::Exit => {
                println!("Exiting chat. Goodbye!");
                return Ok(());
            }
            UserInput::Empty => {
                println!("Please enter a valid message.");
            }
            UserInput::Message(message) => match session.respond(&message).await {
                Ok(response) => {
                    println!("{} {}", "Bot:".cyan().bold(), response);
                    if show_summary {
                        println!(
                            "{}",
                            format!("[Conversation Summary]: {}", session.digest()).dimmed()
                        );
                    }
                }
                Err(err) => {
                    // Fatal: report as plain text and end the session.
                    println!("An error occurred: {err}");
                    return Err(err.into());
                }
            },
        }
    }
}
