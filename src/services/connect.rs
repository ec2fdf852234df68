//! Connect-flow orchestration.
//!
//! Implements the connect state machine: normalize the agent name, resolve
//! its adapter, short-circuit if already connected, invoke the adapter's
//! configure step, and record the result.

use std::sync::Arc;

use tracing::{info, warn};

use crate::adapters::AdapterRegistry;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::AgentRecord;
use crate::domain::ports::AgentStore;

/// Outcome of a connect attempt that did not error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// The agent was already marked connected; the adapter was never built.
    AlreadyConnected,
    /// The adapter configured the agent and the store was updated.
    Connected,
    /// The adapter declined (returned false); state is unchanged.
    Refused,
}

/// Orchestrates agent connection against a registry and a state store.
pub struct ConnectService {
    registry: AdapterRegistry,
    agents: Arc<dyn AgentStore>,
}

impl ConnectService {
    /// Service over the given registry and agent store.
    pub fn new(registry: AdapterRegistry, agents: Arc<dyn AgentStore>) -> Self {
        Self { registry, agents }
    }

    /// Run the connect flow for `raw_name`.
    ///
    /// Idempotent: a second call for a connected agent short-circuits with
    /// [`ConnectOutcome::AlreadyConnected`] without constructing the adapter.
    /// Unknown agents yield [`DomainError::UnknownAgent`]; adapter errors
    /// propagate and leave the store untouched.
    pub async fn connect(&self, raw_name: &str) -> DomainResult<ConnectOutcome> {
        let name = raw_name.to_lowercase();

        let already_connected = self
            .agents
            .status(&name)?
            .is_some_and(|record| record.status.is_connected());
        if already_connected {
            return Ok(ConnectOutcome::AlreadyConnected);
        }

        let adapter = self
            .registry
            .resolve(&name)
            .ok_or_else(|| DomainError::UnknownAgent(raw_name.to_string()))?;

        if adapter.configure_mcp().await? {
            self.agents.upsert(AgentRecord::connected(&name))?;
            info!(agent = %name, "agent connected");
            Ok(ConnectOutcome::Connected)
        } else {
            warn!(agent = %name, "adapter declined to configure MCP");
            Ok(ConnectOutcome::Refused)
        }
    }
}
