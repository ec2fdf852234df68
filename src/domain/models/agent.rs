//! Agent connection state models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Connection status of a known agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionStatus {
    /// The agent's adapter configured MCP successfully.
    Connected,
    /// The agent is known but not wired up to the proxy.
    NotConnected,
}

impl ConnectionStatus {
    /// Whether this status counts as connected for the connect-flow
    /// short-circuit.
    pub const fn is_connected(self) -> bool {
        matches!(self, Self::Connected)
    }

    /// Stable string form used in user-facing output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::NotConnected => "not-connected",
        }
    }
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single agent's record in the state store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRecord {
    /// Lowercased agent name; the store keys on this.
    pub name: String,
    /// Current connection status.
    pub status: ConnectionStatus,
    /// When the agent last connected successfully, if ever.
    pub connected_at: Option<DateTime<Utc>>,
}

impl AgentRecord {
    /// Build a connected record for `name`, stamped with the current time.
    ///
    /// The name is lowercased so lookups stay case-insensitive.
    pub fn connected(name: &str) -> Self {
        Self {
            name: name.to_lowercase(),
            status: ConnectionStatus::Connected,
            connected_at: Some(Utc::now()),
        }
    }
}

/// Result shape of a list-all query over the agent store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentRoster {
    /// All known agents, sorted by name.
    pub agents: Vec<AgentRecord>,
}

impl AgentRoster {
    /// Returns true when no agents have ever been recorded.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
