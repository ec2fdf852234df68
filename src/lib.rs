//! Memlink - MCP agent connector
//!
//! Memlink connects AI coding agents to a remote MCP memory service. It
//! persists user credentials, configures agents through per-agent adapters,
//! tracks connection status, and runs a small HTTP proxy that forwards
//! context payloads upstream with the stored credentials attached.
//!
//! # Architecture
//!
//! The crate follows a clean/hexagonal layering:
//!
//! - **Domain Layer** (`domain`): models, ports, and the error taxonomy
//! - **Adapter Layer** (`adapters`): per-agent adapters and their registry
//! - **Infrastructure Layer** (`infrastructure`): JSON-file-backed stores
//! - **Service Layer** (`services`): connect-flow orchestration
//! - **Proxy Layer** (`proxy`): the axum HTTP proxy
//! - **CLI Layer** (`cli`): command-line interface

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod proxy;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::AdapterRegistry;
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{AgentRecord, AgentRoster, ConnectionStatus, ContextData, Credentials};
pub use domain::ports::{AgentAdapter, AgentStore, CredentialStore};
pub use infrastructure::{JsonAgentStore, JsonCredentialStore};
pub use proxy::{ProxyConfig, ProxyServer};
pub use services::{ConnectOutcome, ConnectService};
