// crates/ethica-server/src/cli/mod.rs
// CLI module for Ethica commands

use clap::{Parser, Subcommand};

pub mod check;
pub mod serve;
pub mod tool;

// Re-export command handlers
pub use check::run_config;
pub use serve::run_mcp_server;
pub use tool::{print_schema, run_tool};

#[derive(Parser)]
#[command(name = "ethica")]
#[command(about = "Structured ethical reasoning for AI Agents")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run as MCP server over stdio (default)
    Serve,

    /// Submit thoughts directly to a fresh engine
    Tool {
        /// JSON thought object, or an array of them submitted in order
        #[arg(index = 1)]
        args: String,
    },

    /// Print the tool definition (name, description, input schema)
    Schema,

    /// Show effective configuration
    Config {
        /// Also validate environment variables and report problems
        #[arg(long)]
        check: bool,
    },
}
