//! Adapter for Claude Code.

use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::domain::errors::DomainResult;
use crate::domain::ports::AgentAdapter;

use super::{patch_mcp_settings, DEFAULT_PROXY_URL};

/// Wires Claude Code up to the proxy via `~/.claude.json`.
pub struct ClaudeAdapter {
    agent: String,
    settings_path: Option<PathBuf>,
}

impl ClaudeAdapter {
    /// Adapter targeting the user-level Claude settings file.
    pub fn new(agent: impl Into<String>) -> Self {
        let settings_path = std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(".claude.json"));
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
impl AgentAdapter for ClaudeAdapter {
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
            json!({ "type": "http", "url": DEFAULT_PROXY_URL }),
        )?;
        debug!(agent = %self.agent, path = %path.display(), "MCP server entry written");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn configure_writes_mcp_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".claude.json");
        let adapter = ClaudeAdapter::with_settings_path("claude", &path);

        assert!(adapter.configure_mcp().await.unwrap());

        let doc: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["mcpServers"]["memlink"]["url"], DEFAULT_PROXY_URL);
    }

    #[tokio::test]
    async fn configure_preserves_existing_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".claude.json");
        std::fs::write(&path, r#"{"theme":"dark","mcpServers":{"other":{}}}"#).unwrap();

        let adapter = ClaudeAdapter::with_settings_path("claude", &path);
        assert!(adapter.configure_mcp().await.unwrap());

        let doc: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["theme"], "dark");
        assert!(doc["mcpServers"]["other"].is_object());
        assert!(doc["mcpServers"]["memlink"].is_object());
    }

    #[tokio::test]
    async fn missing_settings_location_declines() {
        let adapter = ClaudeAdapter {
            agent: "claude".to_string(),
            settings_path: None,
        };
        assert!(!adapter.configure_mcp().await.unwrap());
    }
}
