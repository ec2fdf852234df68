//! `connect` command: run the connect flow for one agent.

use std::sync::Arc;

use anyhow::Result;

use crate::adapters::AdapterRegistry;
use crate::cli::types::ConnectArgs;
use crate::domain::errors::DomainError;
use crate::infrastructure::JsonAgentStore;
use crate::services::{ConnectOutcome, ConnectService};

/// Connect the named agent to the MCP proxy.
///
/// Every error is converted into a user-facing line here; the command never
/// propagates a crash.
pub async fn execute(args: ConnectArgs, json: bool) -> Result<()> {
    let service = ConnectService::new(
        AdapterRegistry::builtin(),
        Arc::new(JsonAgentStore::default()),
    );
    execute_with_service(&service, args, json).await
}

/// Same as [`execute`] but against a caller-provided service.
pub async fn execute_with_service(
    service: &ConnectService,
    args: ConnectArgs,
    json: bool,
) -> Result<()> {
    let name = &args.agent_name;
    if !json {
        println!("Connecting agent: {name}");
    }

    let (connected, message) = match service.connect(name).await {
        Ok(ConnectOutcome::AlreadyConnected) => {
            (true, format!("Agent {name} is already connected."))
        }
        Ok(ConnectOutcome::Connected) => (true, format!("Agent {name} connected successfully.")),
        Ok(ConnectOutcome::Refused) => (
            false,
            format!("Failed to connect agent {name}. Please check the agent name or permissions."),
        ),
        Err(DomainError::UnknownAgent(agent)) => {
            (false, format!("No adapter found for agent: {agent}"))
        }
        Err(err) => (false, format!("Error connecting agent {name}: {err}")),
    };

    if json {
        println!(
            "{}",
            serde_json::json!({ "agent": name.to_lowercase(), "connected": connected, "message": message })
        );
    } else {
        println!("{message}");
    }
    Ok(())
}
