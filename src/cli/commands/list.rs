//! `list` command: read-only agent reporting.

use anyhow::{Context, Result};

use crate::cli::output::format_agent_table;
use crate::cli::types::ListArgs;
use crate::domain::ports::AgentStore;
use crate::infrastructure::JsonAgentStore;

/// List all agents, show one agent's status, or print usage hints.
pub async fn execute(args: ListArgs, json: bool) -> Result<()> {
    let store = JsonAgentStore::default();
    execute_with_store(&store, args, json)
}

/// Same as [`execute`] but against a caller-provided store.
pub fn execute_with_store(store: &dyn AgentStore, args: ListArgs, json: bool) -> Result<()> {
    if args.all {
        let roster = store.list_all().context("Failed to list agents")?;

        if json {
            println!("{}", serde_json::to_string_pretty(&roster)?);
        } else if roster.is_empty() {
            println!("No agents found.");
        } else {
            println!("{}", format_agent_table(&roster));
        }
    } else if let Some(name) = args.status {
        let record = store
            .status(&name)
            .context("Failed to query agent status")?;

        if json {
            println!(
                "{}",
                serde_json::to_string_pretty(&status_json(&name, record.as_ref()))?
            );
        } else {
            match record {
                Some(record) if record.status.is_connected() => {
                    println!("Agent '{name}' is connected (Status: {}).", record.status);
                }
                _ => println!("Agent '{name}' is not connected or not found."),
            }
        }
    } else {
        println!("No specific option provided. Use --all or --status <agent_name>.");
        println!("Examples:");
        println!("  memlink list --all");
        println!("  memlink list --status claude");
    }
    Ok(())
}

/// JSON shape for a single-agent status query.
///
/// Unknown agents get an explicit `connected: false` object rather than a
/// bare `null`, matching the shape the other commands emit.
fn status_json(name: &str, record: Option<&crate::domain::models::AgentRecord>) -> serde_json::Value {
    record.map_or_else(
        || {
            serde_json::json!({
                "agent": name.to_lowercase(),
                "connected": false,
            })
        },
        |record| {
            serde_json::json!({
                "agent": record.name,
                "connected": record.status.is_connected(),
                "status": record.status.as_str(),
                "connected_at": record.connected_at,
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::AgentRecord;

    #[test]
    fn unknown_agent_status_is_a_shaped_object() {
        let value = status_json("Copilot", None);
        assert_eq!(
            value,
            serde_json::json!({ "agent": "copilot", "connected": false })
        );
    }

    #[test]
    fn known_agent_status_reports_connection() {
        let record = AgentRecord::connected("claude");
        let value = status_json("claude", Some(&record));
        assert_eq!(value["agent"], "claude");
        assert_eq!(value["connected"], true);
        assert_eq!(value["status"], "connected");
        assert!(value["connected_at"].is_string());
    }
}

