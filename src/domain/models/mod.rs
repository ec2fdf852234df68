//! Domain models.

pub mod agent;
pub mod context;
pub mod credentials;

pub use agent::{AgentRecord, AgentRoster, ConnectionStatus};
pub use context::ContextData;
pub use credentials::Credentials;
