// crates/ethica-server/src/main.rs
// Ethica - Ethical Thinking MCP server

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use ethica::config::{Settings, ethica_dir};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env files (global first, then project - project overrides)
    let _ = dotenvy::from_path(ethica_dir().join(".env"));
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let settings = Settings::load();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(settings.log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        None | Some(Commands::Serve) => {
            cli::run_mcp_server(&settings).await?;
        }
        Some(Commands::Tool { args }) => {
            let last_accepted = cli::run_tool(&settings, &args).await?;
            if !last_accepted {
                std::process::exit(1);
            }
        }
        Some(Commands::Schema) => {
            cli::print_schema()?;
        }
        Some(Commands::Config { check }) => {
            cli::run_config(&settings, check);
        }
    }

    Ok(())
}
