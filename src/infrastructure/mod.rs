//! Infrastructure layer: file-backed implementations of the domain ports.

pub mod agents;
pub mod config;

pub use agents::JsonAgentStore;
pub use config::JsonCredentialStore;
