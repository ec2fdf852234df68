//! Agent adapter port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;

/// Port for per-agent adapters that wire an agent up to the MCP proxy.
///
/// Each adapter knows how to configure one agent (typically by patching the
/// agent's own settings file with an MCP server entry). The connect flow
/// treats `configure_mcp` as opaque: it may touch the filesystem or the
/// network, and it reports refusal (`Ok(false)`) separately from failure
/// (`Err`).
#[async_trait]
pub trait AgentAdapter: Send + Sync {
    /// Normalized name of the agent this adapter configures.
    fn agent_name(&self) -> &str;

    /// Configure the agent to talk to the MCP proxy.
    ///
    /// Returns `Ok(true)` when the agent was configured, `Ok(false)` when
    /// the adapter declined (e.g. the agent's settings location could not be
    /// determined), and `Err` on any I/O or external failure. The agent is
    /// only marked connected on `Ok(true)`.
    async fn configure_mcp(&self) -> DomainResult<bool>;
}
