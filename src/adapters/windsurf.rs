//! Adapter for Windsurf.

use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::domain::errors::DomainResult;
use crate::domain::ports::AgentAdapter;

use super::{patch_mcp_settings, DEFAULT_PROXY_URL};

/// Wires Windsurf up to the proxy via `~/.codeium/windsurf/mcp_config.json`.
pub struct WindsurfAdapter {
    agent: String,
    settings_path: Option<PathBuf>,
}

impl WindsurfAdapter {
    /// Adapter targeting the user-level Windsurf MCP config.
    pub fn new(agent: impl Into<String>) -> Self {
        let settings_path = std::env::var_os("HOME").map(|home| {
            PathBuf::from(home)
                .join(".codeium")
                .join("windsurf")
                .join("mcp_config.json")
        });
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
impl AgentAdapter for WindsurfAdapter {
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
            json!({ "serverUrl": DEFAULT_PROXY_URL }),
        )?;
        debug!(agent = %self.agent, path = %path.display(), "MCP server entry written");
        Ok(true)
    }
}
