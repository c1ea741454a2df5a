//! CLI argument definitions using clap
//!
//! Credentials can come from flags or from the environment; resolution
//! happens once at startup in `main`.

use clap::Parser;

use organizze_core::DEFAULT_BASE_URL;

/// Organizze MCP - read-only finance lookups over MCP
#[derive(Parser)]
#[command(name = "organizze-mcp")]
#[command(about = "MCP server for the Organizze personal finance API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Organizze account username
    ///
    /// Falls back to the ORGANIZZE_USERNAME environment variable.
    #[arg(long)]
    pub organizze_username: Option<String>,

    /// Organizze API key
    ///
    /// Falls back to the ORGANIZZE_API_KEY environment variable.
    #[arg(long)]
    pub organizze_api_key: Option<String>,

    /// Base URL of the Organizze REST API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
