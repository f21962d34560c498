use anyhow::Result;
use chrono::Utc;
use clap::Parser;

use wasteless_chat::AssistantClient;

mod chat_repl;
mod cli;
mod config;
mod conversation_logger;
mod inventory_view;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from a .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inventory { status, date } => {
            let reference = date.unwrap_or_else(|| Utc::now().date_naive());
            inventory_view::run(status, reference);
        }
        Commands::Chat { no_log } => {
            let endpoint = config::resolve_endpoint(cli.api_url.as_deref());
            let client = AssistantClient::new(endpoint);
            chat_repl::run(client, !no_log).await?;
        }
    }

    Ok(())
}
