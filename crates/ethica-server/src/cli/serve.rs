// crates/ethica-server/src/cli/serve.rs
// MCP server initialization and main loop

use anyhow::Result;
use ethica::config::{EnvConfig, Settings};
use ethica::mcp::EthicaServer;
use tracing::{info, warn};

/// Run the MCP server on stdio until the client disconnects
pub async fn run_mcp_server(settings: &Settings) -> Result<()> {
    let validation = EnvConfig::load().validate();
    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    let server = EthicaServer::new(settings);
    info!(
        thought_logging = settings.thought_logging,
        "Starting Ethica MCP server on stdio"
    );

    let transport = rmcp::transport::io::stdio();
    let service = rmcp::serve_server(server, transport).await?;
    service.waiting().await?;

    info!("MCP client disconnected, shutting down");
    Ok(())
}
