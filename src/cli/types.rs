//! CLI type definitions.
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Args, Parser, Subcommand};

/// Top-level CLI definition.
#[derive(Parser)]
#[command(name = "memlink")]
#[command(about = "Memlink - connect AI agents to an MCP memory service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Selected subcommand.
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Save user credentials to the configuration file
    Key(KeyArgs),

    /// Connect an agent to the MCP server
    Connect(ConnectArgs),

    /// List all agents or show one agent's status
    List(ListArgs),

    /// Start the HTTP proxy server
    Start(StartArgs),
}

/// Arguments for `memlink key`.
#[derive(Args, Debug)]
pub struct KeyArgs {
    /// API key (stored as the contract id)
    pub api_key: String,

    /// Bearer token for authentication
    #[arg(short, long)]
    pub token: Option<String>,
}

/// Arguments for `memlink connect`.
#[derive(Args, Debug)]
pub struct ConnectArgs {
    /// Name of the agent to connect (case-insensitive)
    pub agent_name: String,
}

/// Arguments for `memlink list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// List all known agents
    #[arg(long)]
    pub all: bool,

    /// Show the status of one agent
    #[arg(long, value_name = "AGENT_NAME")]
    pub status: Option<String>,
}

/// Arguments for `memlink start`.
#[derive(Args, Debug)]
pub struct StartArgs {
    /// Port to run the proxy on
    #[arg(short, long, default_value_t = 8000)]
    pub port: u16,
}
