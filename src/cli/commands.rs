//! CLI commands and argument parsing

use clap::{Args, Parser, Subcommand};

/// pagekit CLI
#[derive(Parser, Debug)]
#[command(name = "pagekit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Pagination flags shared by the subcommands
#[derive(Args, Debug, Clone)]
pub struct PagerArgs {
    /// Total number of items
    #[arg(short, long, default_value = "0")]
    pub total: u64,

    /// Page size
    #[arg(short = 's', long, default_value = "10")]
    pub page_size: u32,

    /// Starting page
    #[arg(short, long, default_value = "1")]
    pub current: u32,

    /// Compact window and jump stride
    #[arg(long)]
    pub show_less_items: bool,

    /// Reduced prev/next-only presentation
    #[arg(long)]
    pub simple: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one pagination strip
    Render {
        /// Pagination flags
        #[command(flatten)]
        pager: PagerArgs,
    },

    /// Apply an action script and render the strip after each step
    Walk {
        /// Pagination flags
        #[command(flatten)]
        pager: PagerArgs,

        /// Comma-separated actions: next, prev, jump-back, jump-forward,
        /// goto=N, size=N, input=TEXT, submit, step-back, step-forward
        #[arg(short, long)]
        actions: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable strip
    Pretty,
    /// One JSON document per line
    Json,
}
