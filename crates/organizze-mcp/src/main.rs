//! Organizze MCP server - read-only finance lookups for MCP hosts
//!
//! Usage:
//!   organizze-mcp --organizze-username USER --organizze-api-key KEY
//!
//! Credentials may also come from ORGANIZZE_USERNAME / ORGANIZZE_API_KEY.
//! The server speaks MCP over stdio.

mod cli;
mod mcp;


use anyhow::Result;
use clap::Parser;
use rmcp::ServiceExt;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use organizze_core::{Credentials, OrganizzeClient};

use cli::Cli;
use mcp::OrganizzeMcpServer;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging on stderr: stdout carries the MCP stdio transport.
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();

    // Credentials are resolved exactly once; a missing secret is fatal here,
    // before any tool is reachable.
    let credentials = Credentials::resolve(cli.organizze_username, cli.organizze_api_key)?;
    let client = OrganizzeClient::new(&cli.base_url, &credentials);

    info!(
        "Starting Organizze MCP server on stdio (upstream {})",
        client.base_url()
    );

    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let service = OrganizzeMcpServer::new(client).serve(transport).await?;
    service.waiting().await?;

    Ok(())
}
