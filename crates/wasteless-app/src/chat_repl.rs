use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::env;

use wasteless_chat::{AssistantApi, AssistantClient, ChatSession};
use wasteless_models::{ChatMessage, Role};

use crate::conversation_logger::ConversationLogger;

/// Run one submit/resolve turn and hand back the messages it appended
/// (the optimistic user message plus the assistant reply or its fallback).
/// An empty slice means the input was silently ignored.
pub async fn run_turn(
    session: &mut ChatSession,
    api: &dyn AssistantApi,
    input: &str,
) -> Vec<ChatMessage> {
    let before = session.transcript().len();
    session.exchange(api, input).await;
    session.transcript()[before..].to_vec()
}

/// Interactive chat loop against the assistant backend.
pub async fn run(client: AssistantClient, log_enabled: bool) -> Result<()> {
    println!("{}", "🥬 WasteLess Assistant".bright_cyan().bold());
    println!(
        "{}",
        format!("Backend: {}", client.endpoint().base_url()).bright_black()
    );
    println!("{}", "Type 'exit' or 'quit' to leave\n".bright_black());

    // Advisory connectivity probe; the chat still opens if it fails, the
    // greeting fallback covers an unreachable backend.
    match client.health().await {
        Ok(health) => println!(
            "{}",
            format!("Backend reports: {} ({})", health.status, health.message).bright_black()
        ),
        Err(e) => eprintln!("{} Backend health check failed: {}", "⚠️".yellow(), e),
    }

    let mut logger = if log_enabled {
        match ConversationLogger::new(&env::current_dir()?).await {
            Ok(l) => Some(l),
            Err(e) => {
                eprintln!("Logging disabled: {}", e);
                None
            }
        }
    } else {
        None
    };

    let mut session = ChatSession::new();
    session.greet(&client).await;
    if let Some(opening) = session.transcript().first() {
        print_assistant(&opening.content);
        if let Some(logger) = &mut logger {
            logger.log(Role::Assistant, &opening.content).await;
        }
    }

    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline(&"you> ".bright_green().to_string()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                if trimmed == "exit" || trimmed == "quit" {
                    break;
                }
                let _ = rl.add_history_entry(trimmed);

                println!("{}", "assistant is typing...".bright_black());
                let appended = run_turn(&mut session, &client, &line).await;
                for message in &appended {
                    if let Some(logger) = &mut logger {
                        logger.log(message.role, &message.content).await;
                    }
                    if message.role == Role::Assistant {
                        print_assistant(&message.content);
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    session.close();
    if let Some(logger) = &mut logger {
        logger.shutdown().await;
    }
    println!("{}", "Goodbye!".bright_black());
    Ok(())
}

fn print_assistant(content: &str) {
    println!("{} {}\n", "assistant>".bright_cyan(), content);
}
