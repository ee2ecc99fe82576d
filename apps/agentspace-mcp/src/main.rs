//! MCP stdio server exposing Agentspace search and deep research.
//!
//! Configuration comes from the environment (`AGENTSPACE_*`,
//! `DISCOVERYENGINE_*`, `GOOGLE_*`, `SESSION`). Logs go to stderr; stdout
//! carries MCP frames.

use std::sync::Arc;

use agentspace_tools::{AgentspaceServer, AgentspaceTools, ServiceExt, build_registry, stdio};
use clap::Parser;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "agentspace_mcp=info,agentspace_tools=info,discoveryengine_async=info";

#[derive(Parser, Debug)]
#[command(name = "agentspace-mcp")]
#[command(about = "MCP server for Agentspace search and deep research", version)]
struct Args {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    // Install the rustls CryptoProvider before any HTTP clients are created.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let tools = AgentspaceTools::from_env()?;
    let config = tools.client().config();
    tracing::info!(
        project = config.project_id(),
        location = config.location(),
        api_base = %config.api_base(),
        "starting agentspace-mcp"
    );

    let registry = build_registry(Arc::new(tools));
    let server = AgentspaceServer::new(Arc::new(registry))
        .with_info("agentspace", env!("CARGO_PKG_VERSION"));

    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
