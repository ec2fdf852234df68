//! Adapter for Cursor.

use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::domain::errors::DomainResult;
use crate::domain::ports::AgentAdapter;

use super::{patch_mcp_settings, DEFAULT_PROXY_URL};

/// Wires Cursor up to the proxy via `~/.cursor/mcp.json`.
pub struct CursorAdapter {
    agent: String,
    settings_path: Option<PathBuf>,
}

impl CursorAdapter {
    /// Adapter targeting the user-level Cursor MCP config.
    pub fn new(agent: impl Into<String>) -> Self {
        let settings_path = std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".cursor").join("mcp.json"));
        Self {
            agent: agent.into(),
            settings_path,
        }
    }

    /// Adapter targeting an explicit settings file (used by tests).
    pub fn with_settings_path(agent: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            agent: agent.into(),
            settings_path: Some(path.into()),
        }
    }
}

#[async_trait]
impl AgentAdapter for CursorAdapter {
    fn agent_name(&self) -> &str {
        &self.agent
    }

    async fn configure_mcp(&self) -> DomainResult<bool> {
        let Some(path) = &self.settings_path else {
            debug!(agent = %self.agent, "no home directory; cannot locate settings");
            return Ok(false);
        };
        patch_mcp_settings(
            &self.agent,
            path,
            "mcpServers",
            json!({ "url": DEFAULT_PROXY_URL }),
        )?;
        debug!(agent = %self.agent, path = %path.display(), "MCP server entry written");
        Ok(true)
    }
}
