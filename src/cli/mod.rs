//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand};

pub mod args;
pub mod context;
pub mod search;
pub mod status;
pub mod token;
pub mod url;

pub use args::{GlobalOptions, OutputFormat, SearchFilterArgs};
pub use context::CommandContext;

/// casafind - search real-estate listings and flatten them into a table
#[derive(Parser, Debug)]
#[command(name = "casafind")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "CASAFIND_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "CASAFIND_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "CASAFIND_DEBUG", hide_env = true)]
    pub debug: bool,

    /// Custom API host (for testing against a stub server)
    #[arg(long, global = true, env = "CASAFIND_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// API key issued by the listings provider
    #[arg(long, global = true, env = "CASAFIND_API_KEY", hide_env = true)]
    pub api_key: Option<String>,

    /// API secret issued by the listings provider
    #[arg(
        long,
        global = true,
        env = "CASAFIND_SECRET",
        hide_env = true,
        hide_env_values = true
    )]
    pub secret: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search listings and print the fields they all share
    Search(SearchArgs),

    /// Print the search URL for the given filters without calling the API
    Url(SearchFilterArgs),

    /// Acquire a bearer token to check credentials
    Token,

    /// Show configuration status
    Status,
}

/// Arguments for the search command
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    #[command(flatten)]
    pub filters: SearchFilterArgs,

    /// Only show these columns, in this order (comma-separated)
    #[arg(long, short = 'c', value_delimiter = ',')]
    pub columns: Vec<String>,
}
