//! Agent state persistence port.

use crate::domain::errors::DomainResult;
use crate::domain::models::{AgentRecord, AgentRoster};

/// Port for the agent connection-status store.
///
/// Keys are lowercased agent names; callers normalize before lookup and
/// implementations normalize again on write so the invariant holds either
/// way.
pub trait AgentStore: Send + Sync {
    /// Fetch the record for `name`, or `None` if the agent is unknown.
    fn status(&self, name: &str) -> DomainResult<Option<AgentRecord>>;

    /// Insert or update the record for its agent name.
    fn upsert(&self, record: AgentRecord) -> DomainResult<()>;

    /// Enumerate every known agent, sorted by name.
    fn list_all(&self) -> DomainResult<AgentRoster>;
}
