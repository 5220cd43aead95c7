pub mod commands;
pub mod context;
pub mod output;

use clap::{Parser, Subcommand};

/// Record visitors into rotating audit files.
#[derive(Parser, Debug)]
#[command(name = "visitlog", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the visitlog directory (default: .visitlog)
    #[arg(long, global = true, env = "VISITLOG_DIR")]
    pub dir: Option<String>,

    /// Override the number of records per audit file
    #[arg(long, global = true)]
    pub max_entries: Option<usize>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize visitlog in the current directory
    Init,

    /// Record a visitor
    Add {
        /// Visitor name
        name: String,
        /// Time of visit (YYYY-MM-DDTHH:MM:SS, default: now)
        #[arg(long)]
        at: Option<String>,
    },

    /// Show recorded visits
    Log {
        /// Filter by visitor name
        #[arg(long)]
        visitor: Option<String>,
        /// Filter entries since this date (YYYY-MM-DD)
        #[arg(long)]
        since: Option<String>,
        /// Show last N entries
        #[arg(long)]
        last: Option<usize>,
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show audit files and where the next record goes
    Status,
}
