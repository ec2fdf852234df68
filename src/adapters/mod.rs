//! Agent adapters for external AI assistants.
//!
//! Each adapter implements [`AgentAdapter`](crate::domain::ports::AgentAdapter)
//! for one agent by patching that agent's own settings file with an MCP
//! server entry pointing at the local proxy.

pub mod claude;
pub mod cursor;
pub mod gemini;
pub mod registry;
pub mod windsurf;

pub use claude::ClaudeAdapter;
pub use cursor::CursorAdapter;
pub use gemini::GeminiAdapter;
pub use registry::{AdapterFactory, AdapterRegistry};
pub use windsurf::WindsurfAdapter;

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::domain::errors::{DomainError, DomainResult};

/// URL the configured agents use to reach the local proxy.
pub const DEFAULT_PROXY_URL: &str = "http://localhost:8000";

/// Key under which adapters register the proxy in agent settings files.
pub const MCP_SERVER_NAME: &str = "memlink";

/// Merge an MCP server entry into the JSON settings file at `path`.
///
/// A missing file starts from an empty object; existing settings are
/// preserved and only `<servers_key>.<MCP_SERVER_NAME>` is replaced. Any
/// I/O or parse problem is reported as an adapter-configure failure for
/// `agent`.
pub(crate) fn patch_mcp_settings(
    agent: &str,
    path: &Path,
    servers_key: &str,
    entry: Value,
) -> DomainResult<()> {
    let configure_err = |reason: String| DomainError::AdapterConfigure {
        agent: agent.to_string(),
        reason,
    };

    let mut document = match fs::read_to_string(path) {
        Ok(raw) => serde_json::from_str::<Value>(&raw)
            .map_err(|err| configure_err(format!("settings file is not valid JSON: {err}")))?,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Value::Object(Map::new()),
        Err(err) => return Err(configure_err(format!("cannot read settings file: {err}"))),
    };

    let root = document
        .as_object_mut()
        .ok_or_else(|| configure_err("settings file root is not a JSON object".to_string()))?;

    let servers = root
        .entry(servers_key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    let servers = servers
        .as_object_mut()
        .ok_or_else(|| configure_err(format!("settings key {servers_key} is not an object")))?;
    servers.insert(MCP_SERVER_NAME.to_string(), entry);

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|err| configure_err(format!("cannot create settings dir: {err}")))?;
        }
    }
    let rendered = serde_json::to_string_pretty(&document)
        .map_err(|err| configure_err(err.to_string()))?;
    fs::write(path, rendered)
        .map_err(|err| configure_err(format!("cannot write settings file: {err}")))
}
