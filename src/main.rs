//! Coupang MCP server entry point.
//!
//! Loads credentials from the environment (or a `.env` file), builds
//! the API client, and serves MCP over stdio. Logging goes to stderr;
//! stdout is reserved for the protocol.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use coupang_mcp::{server, Config, CoupangClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging on stderr; stdout carries the MCP transport
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("coupang_mcp=info")),
        )
        .init();

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Missing credentials are fatal at startup
    let config = Config::from_env()?;
    let client = CoupangClient::new(&config)?;

    server::run(client).await?;

    Ok(())
}
