//! Domain ports — the traits infrastructure and adapters implement.

pub mod adapter;
pub mod agent_store;
pub mod credential_store;

pub use adapter::AgentAdapter;
pub use agent_store::AgentStore;
pub use credential_store::CredentialStore;
