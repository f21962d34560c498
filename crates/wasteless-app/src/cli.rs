use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use wasteless_inventory::StatusFilter;

/// CLI arguments for the wasteless dashboard
#[derive(Parser)]
#[command(name = "wasteless")]
#[command(about = "WasteLess - grocery inventory dashboard with an assistant chat")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the assistant backend (e.g. http://localhost:8000).
    /// Falls back to WASTELESS_API_URL, then the local default.
    #[arg(long, value_name = "URL", global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the inventory table with expiration-status coloring
    Inventory {
        /// Only show items with this status (all, good, warning, critical, expired)
        #[arg(long, default_value = "all")]
        status: StatusFilter,

        /// Reference date for expiration windows (YYYY-MM-DD); defaults to today
        #[arg(long, value_name = "DATE")]
        date: Option<NaiveDate>,
    },

    /// Chat with the WasteLess assistant
    Chat {
        /// Do not write the JSONL conversation log under logs/
        #[arg(long)]
        no_log: bool,
    },
}
